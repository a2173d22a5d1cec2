//! # auth-store
//!
//! Authentication state for a GUI client, modeled as a reducer: a pure
//! transition function folds sign-in/sign-out lifecycle events into an
//! [`AuthState`] value, persisting the authorization flag through an
//! injected [`AuthStorage`] capability so it survives process restarts.
//!
//! This crate records authentication outcomes reported to it; it does not
//! perform authentication, own a transport, or render anything. The
//! dispatcher producing events and the UI consuming state live elsewhere.

pub mod event;
pub mod state;
pub mod storage;
pub mod store;

pub use event::{AuthEvent, CreateError};
pub use state::{AuthState, ErrorRecord, StoredAuth};
pub use storage::{AuthStorage, FileStorage, MemoryStorage};
pub use store::{AuthStore, reduce};
