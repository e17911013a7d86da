//! # star4ce-session
//!
//! Persisted client-side credential state for the Star4ce session gate.
//!
//! ## Modules
//!
//! - `credential` — the stored token/role/email tuple
//! - `backend` — pluggable persistence backends (file, in-memory)
//! - `store` — the [`SessionStore`] facade the rest of the system uses

pub mod backend;
pub mod credential;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, SessionBackend};
pub use credential::Credential;
pub use store::SessionStore;
