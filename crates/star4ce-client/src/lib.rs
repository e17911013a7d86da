//! # star4ce-client
//!
//! Thin HTTP wrappers for talking to the Star4ce remote authority:
//! the login flow and the identity-verification check the access guard
//! relies on.

pub mod auth;
pub mod dto;

pub use auth::AuthClient;
pub use dto::{IdentityResponse, LoginRequest, LoginResponse};
