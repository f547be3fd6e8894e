//! Configuration for the OTP services

use std::time::Duration;

use pa_shared::config::OtpConfig;

use crate::domain::value_objects::DEFAULT_COUNTRY_CODE;

/// Configuration for OTP issuance and verification
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Country code used when canonicalizing phone numbers
    pub country_code: String,
    /// How long an issued code stays valid
    pub code_ttl: Duration,
    /// Cooldown before another code may be issued for the same phone
    pub throttle: Duration,
    /// Upper bound on a single SMS dispatch
    pub sms_timeout: Duration,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            code_ttl: Duration::from_secs(120),
            throttle: Duration::from_secs(60),
            sms_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            country_code: config.country_code.clone(),
            code_ttl: Duration::from_secs(config.code_ttl_seconds),
            throttle: Duration::from_secs(config.throttle_seconds),
            sms_timeout: Duration::from_secs(config.sms_timeout_seconds),
        }
    }
}
