//! Authentication service module
//!
//! Account-level use cases composed from the OTP and session services:
//! - Registration with a pending account carried in the OTP entry
//! - OTP re-issue and verification
//! - Password login for verified accounts
//! - Profile read and update
//! - Logout

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
