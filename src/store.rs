//! The authentication reducer and its dispatcher-facing store.
//!
//! DESIGN
//! ======
//! `reduce` is a total function over `(state, event)`: every event kind
//! has a defined outcome and unhandled kinds are the identity transition.
//! The persistence capability is an explicit parameter; writes happen
//! synchronously inside the transition, once per qualifying event, never
//! batched or retried.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::event::AuthEvent;
use crate::state::{AuthState, ErrorRecord, StoredAuth};
use crate::storage::AuthStorage;

/// Revoke persisted authorization if any error in the list is a 401.
///
/// A 401 observed on an unrelated operation is treated as evidence the
/// cached session is no longer valid. Only the persisted flag is touched;
/// in-memory state is left alone, so the revocation does not masquerade as
/// feedback about the operation that happened to reveal it.
fn revoke_persisted_if_unauthorized<S: AuthStorage>(errors: &[ErrorRecord], storage: &S) {
    if errors.iter().any(|e| e.status == 401) {
        log::debug!("401 in error payload; revoking persisted authorization");
        storage.store(&StoredAuth::allowed(false));
    }
}

/// Fold one lifecycle event into the next authentication state, persisting
/// the authorization flag on qualifying transitions.
#[must_use]
pub fn reduce<S: AuthStorage>(state: &AuthState, event: &AuthEvent, storage: &S) -> AuthState {
    match event {
        AuthEvent::SignInRequested | AuthEvent::SignOutRequested => {
            AuthState { network_error: false, ..state.clone() }
        }
        AuthEvent::SignInSucceeded { authenticated, errors }
        | AuthEvent::SignOutSucceeded { authenticated, errors } => {
            storage.store(&StoredAuth::allowed(*authenticated));
            AuthState {
                allowed: *authenticated,
                errors: errors.clone().unwrap_or_default(),
                network_error: false,
            }
        }
        AuthEvent::SignInFailed => {
            storage.store(&StoredAuth::allowed(false));
            // A rejection carries no detail: prior errors are cleared, the
            // network flag is left as-is.
            AuthState { allowed: false, errors: Vec::new(), ..state.clone() }
        }
        AuthEvent::SignInErrored { errors, network_error }
        | AuthEvent::SignOutErrored { errors, network_error } => {
            storage.store(&StoredAuth::allowed(false));
            AuthState {
                allowed: false,
                errors: errors.clone().unwrap_or_default(),
                network_error: *network_error,
            }
        }
        AuthEvent::CreateErrored { error } => {
            // Persisted-only revocation; the returned state is untouched.
            revoke_persisted_if_unauthorized(&error.errors, storage);
            state.clone()
        }
        AuthEvent::Unknown => state.clone(),
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Owns the current [`AuthState`] and the persistence capability.
///
/// A single-writer dispatcher pushes events through [`AuthStore::dispatch`]
/// in the order they occur; consumers read [`AuthStore::state`] and never
/// mutate it.
#[derive(Debug)]
pub struct AuthStore<S> {
    storage: S,
    state: AuthState,
}

impl<S: AuthStorage> AuthStore<S> {
    /// Seed initial state from the store (persisted fields override the
    /// defaults) and take ownership of the capability.
    #[must_use]
    pub fn new(storage: S) -> Self {
        let state = AuthState::seeded_from(storage.load());
        Self { storage, state }
    }

    /// Current authentication state, read-only.
    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Apply one event, replacing the state wholesale.
    pub fn dispatch(&mut self, event: &AuthEvent) {
        self.state = reduce(&self.state, event, &self.storage);
    }

    /// The underlying storage capability.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
