//! # PhoneAuth Core
//!
//! Core business logic and domain layer for the PhoneAuth backend.
//! This crate contains the OTP and session state machine, domain entities,
//! repository interfaces and error types. Storage, caching and SMS delivery
//! are consumed through traits and implemented in the infrastructure crate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
