//! # star4ce-core
//!
//! Core crate for the Star4ce session gate. Contains configuration
//! schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other Star4ce crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
