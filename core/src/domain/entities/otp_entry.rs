//! One-time passcode cache payload.

use serde::{Deserialize, Serialize};

/// Registration fields captured when an OTP is issued for a new account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

/// Value stored under `otp_<phone>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Six ASCII digits
    pub code: String,

    /// Present for registration flows, absent for re-verification
    #[serde(default)]
    pub pending: Option<PendingRegistration>,
}

impl OtpEntry {
    pub fn new(code: String, pending: Option<PendingRegistration>) -> Self {
        Self { code, pending }
    }

    /// Serialize for the cache
    pub fn to_cache_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a cached value. Malformed payloads become an empty entry, whose
    /// empty code never matches a submitted code.
    pub fn from_cache_value(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, event = "otp_entry_malformed", "Discarding malformed OTP payload");
                Self::default()
            }
        }
    }
}
