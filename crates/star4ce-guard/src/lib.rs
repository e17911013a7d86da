//! # star4ce-guard
//!
//! The access guard: decides whether a visitor may view protected content
//! by reconciling the locally stored credential with the remote authority.
//!
//! One evaluation reads the session store, optionally issues a single
//! verification call, and lands in a terminal decision. Rejections clear
//! the store and carry a login redirect; verification failures of any
//! cause are absorbed, never surfaced raw.

pub mod guard;
pub mod policy;
pub mod redirect;
pub mod state;

pub use guard::{AccessGuard, GuardDecision};
pub use policy::ProtectionPolicy;
pub use redirect::LoginRedirect;
pub use state::{GuardState, VerificationOutcome};
