//! Error types for the OTP and session flows
//!
//! Each variant is a distinct, user-presentable failure. Localized messages
//! are configured in the presentation layer.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A code was issued for this phone less than the cooldown ago
    #[error("Please wait a minute before requesting a new code")]
    RateLimited,

    #[error("Verification code not found or expired")]
    CodeExpiredOrMissing,

    #[error("Invalid verification code")]
    InvalidCode,

    /// No user exists and the OTP entry carries no pending registration
    #[error("Registration data missing, please register again")]
    MissingRegistrationData,

    #[error("Phone number already registered")]
    AlreadyRegistered,

    #[error("Phone number not verified")]
    NotVerified,

    #[error("Invalid phone number or password")]
    InvalidCredentials,

    #[error("SMS delivery failed")]
    DeliveryFailed,

    #[error("User not found")]
    UserNotFound,

    /// A concurrent registration created the user first
    #[error("User already exists for this phone number")]
    Conflict,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Header absent, not `Bearer <token>`, or token empty
    #[error("Missing or malformed authorization credential")]
    MalformedCredential,

    #[error("Token revoked")]
    Revoked,

    #[error("Invalid or expired token")]
    InvalidOrExpired,

    /// Token could not be decoded or carries no expiry claim
    #[error("Malformed token")]
    MalformedToken,

    #[error("Token generation failed")]
    GenerationFailed,
}
