//! One-time passcode issuance and verification
//!
//! Both halves coordinate only through the TTL cache:
//! - `otp_<phone>` holds the code and any pending registration (120 s)
//! - `limit_<phone>` blocks re-issuance for the cooldown window (60 s)

mod config;
mod issuer;
mod types;
mod verifier;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use issuer::{generate_code, OtpIssuer};
pub use types::{IssueOtpResult, VerifyOtpResult};
pub use verifier::{codes_match, OtpVerifier};
