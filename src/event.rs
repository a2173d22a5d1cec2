//! Authentication lifecycle events.
//!
//! The serde wire form uses the GUI action-type tags (`REQUEST_SIGNIN`,
//! `RECEIVE_SIGNIN_SUCCESS`, ...) so events round-trip with the dispatch
//! stream unchanged. Action types this reducer does not handle deserialize
//! to [`AuthEvent::Unknown`], which reduces as the identity transition.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};

use crate::state::ErrorRecord;

/// One lifecycle event in the authentication action stream.
///
/// Success events carry the resulting `authenticated` flag explicitly; the
/// reducer records what the server reported rather than assuming success
/// means authorized. Errored events distinguish a transport failure
/// (`network_error`) from a business rejection carried in `errors`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthEvent {
    /// A sign-in attempt is starting.
    #[serde(rename = "REQUEST_SIGNIN")]
    SignInRequested,
    /// A sign-out attempt is starting.
    #[serde(rename = "REQUEST_SIGNOUT")]
    SignOutRequested,
    /// The server answered a sign-in attempt.
    #[serde(rename = "RECEIVE_SIGNIN_SUCCESS")]
    SignInSucceeded {
        /// Authorization outcome as reported by the server.
        authenticated: bool,
        /// Errors the server attached despite the successful exchange.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        errors: Option<Vec<ErrorRecord>>,
    },
    /// The server rejected the credentials outright. Carries no detail;
    /// the reducer clears any prior errors on this path.
    #[serde(rename = "RECEIVE_SIGNIN_FAIL")]
    SignInFailed,
    /// A sign-in attempt ended in an error response or a transport failure.
    #[serde(rename = "RECEIVE_SIGNIN_ERROR")]
    SignInErrored {
        /// Errors carried with the response, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        errors: Option<Vec<ErrorRecord>>,
        /// True when the failure was transport-level (server unreachable).
        #[serde(default, rename = "networkError")]
        network_error: bool,
    },
    /// The server answered a sign-out attempt.
    #[serde(rename = "RECEIVE_SIGNOUT_SUCCESS")]
    SignOutSucceeded {
        /// Authorization outcome as reported by the server.
        authenticated: bool,
        /// Errors the server attached despite the successful exchange.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        errors: Option<Vec<ErrorRecord>>,
    },
    /// A sign-out attempt ended in an error response or a transport failure.
    #[serde(rename = "RECEIVE_SIGNOUT_ERROR")]
    SignOutErrored {
        /// Errors carried with the response, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        errors: Option<Vec<ErrorRecord>>,
        /// True when the failure was transport-level (server unreachable).
        #[serde(default, rename = "networkError")]
        network_error: bool,
    },
    /// Some unrelated create operation failed. The payload is scanned for
    /// a 401 (revoked credentials); nothing else about it is interpreted.
    #[serde(rename = "RECEIVE_CREATE_ERROR")]
    CreateErrored {
        /// The failed operation's error payload.
        error: CreateError,
    },
    /// Any dispatched action type this reducer does not handle.
    #[serde(other)]
    Unknown,
}

/// Error payload attached to a failed create operation. Only the nested
/// `errors` list is inspected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateError {
    /// Errors reported for the failed operation.
    #[serde(default)]
    pub errors: Vec<ErrorRecord>,
}
