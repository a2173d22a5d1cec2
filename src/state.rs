//! Authentication state values and the persisted projection.
//!
//! DESIGN
//! ======
//! `AuthState` is value-per-transition: the reducer never mutates it in
//! place, it builds the next value from the previous one. `StoredAuth` is
//! the partial record an [`AuthStorage`](crate::storage::AuthStorage)
//! holds; every field is optional so a store that only ever received
//! `{allowed}` writes still seeds correctly.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// ERROR RECORD
// =============================================================================

/// A validation/business error surfaced by the API layer.
///
/// Opaque to the reducer except for `status`: a 401 anywhere in an error
/// list revokes persisted authorization. Everything else the server
/// attached rides along in `detail` untouched, for UI display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// HTTP-like status code reported with the error.
    pub status: u16,
    /// Remaining payload fields, passed through verbatim.
    #[serde(flatten)]
    pub detail: Value,
}

impl ErrorRecord {
    /// A record carrying only a status code.
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self { status, detail: Value::Object(serde_json::Map::new()) }
    }
}

// =============================================================================
// AUTH STATE
// =============================================================================

/// Authentication state for the current GUI session.
///
/// Read-only to consumers; the only legitimate mutator is
/// [`reduce`](crate::store::reduce).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    /// Whether the current session is authorized. Always reflects the most
    /// recent reported outcome, and matches the persisted flag after every
    /// transition that writes to the store.
    pub allowed: bool,
    /// Errors from the last relevant action, in the order they arrived.
    pub errors: Vec<ErrorRecord>,
    /// True only while the latest outcome was a transport-level failure,
    /// as opposed to a business-logic rejection.
    pub network_error: bool,
}

impl AuthState {
    /// Initial state at process start: defaults overridden by whatever the
    /// persistent store currently holds.
    #[must_use]
    pub fn seeded_from(stored: StoredAuth) -> Self {
        let defaults = Self::default();
        Self {
            allowed: stored.allowed.unwrap_or(defaults.allowed),
            errors: stored.errors.unwrap_or(defaults.errors),
            network_error: stored.network_error.unwrap_or(defaults.network_error),
        }
    }
}

// =============================================================================
// STORED PROJECTION
// =============================================================================

/// Partial projection of [`AuthState`] held by a persistent store.
///
/// Absent fields are omitted on the wire; a write only touches the fields
/// it supplies (see [`StoredAuth::merge`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAuth {
    /// Persisted authorization flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<bool>,
    /// Persisted error list, if any writer ever supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorRecord>>,
    /// Persisted network-failure flag, if any writer ever supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_error: Option<bool>,
}

impl StoredAuth {
    /// A record carrying only the authorization flag, the one projection
    /// the reducer ever writes.
    #[must_use]
    pub fn allowed(value: bool) -> Self {
        Self { allowed: Some(value), ..Self::default() }
    }

    /// Overlay `other`'s present fields onto this record. Fields `other`
    /// leaves absent are preserved.
    pub fn merge(&mut self, other: &StoredAuth) {
        if let Some(allowed) = other.allowed {
            self.allowed = Some(allowed);
        }
        if let Some(errors) = &other.errors {
            self.errors = Some(errors.clone());
        }
        if let Some(network_error) = other.network_error {
            self.network_error = Some(network_error);
        }
    }
}
