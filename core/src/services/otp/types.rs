//! Result types for the OTP services

use serde::Serialize;
use uuid::Uuid;

/// Result of issuing a code
#[derive(Debug, Clone, Serialize)]
pub struct IssueOtpResult {
    /// Canonical phone the code was sent to
    pub phone: String,
    /// Seconds until the code expires
    pub expires_in: u64,
    /// The SMS message ID from the provider
    #[serde(skip)]
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpResult {
    pub success: bool,
    /// The verified user
    pub user_id: Uuid,
    /// Whether the user was created from a pending registration
    pub created: bool,
}
