//! Configuration for the authentication service

use pa_shared::config::OtpConfig;

use crate::domain::value_objects::DEFAULT_COUNTRY_CODE;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Country code used when canonicalizing phone numbers
    pub country_code: String,
    /// bcrypt cost for registration passwords
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&OtpConfig> for AuthServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            country_code: config.country_code.clone(),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
