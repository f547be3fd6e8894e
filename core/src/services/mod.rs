//! Business services containing the authentication state machine.

pub mod auth;
pub mod keys;
pub mod otp;
pub mod session;
pub mod sweep;
pub mod traits;

#[cfg(test)]
pub(crate) mod mocks;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use otp::{IssueOtpResult, OtpIssuer, OtpServiceConfig, OtpVerifier, VerifyOtpResult};
pub use session::{
    AccessGuard, Authorizer, Principal, RevokeResult, SessionConfig, SessionIssuer,
    SessionRevoker, TokenService,
};
pub use sweep::{SweepServiceConfig, UnverifiedUserSweep};
pub use traits::{CacheServiceTrait, HealthCheck, SmsServiceTrait};
