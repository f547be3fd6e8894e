//! Authentication configuration: session token signing and OTP policy

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for HS256 signing
    pub secret: String,

    /// Session token lifetime in seconds
    pub session_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            session_expiry: 86_400, // 24 hours
            issuer: String::from("phoneauth"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set session expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.session_expiry = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// One-time passcode policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Country code prepended to phone numbers that lack it
    pub country_code: String,

    /// Lifetime of an issued code in seconds
    pub code_ttl_seconds: u64,

    /// Cooldown between issuances for one phone number in seconds
    pub throttle_seconds: u64,

    /// Upper bound on a single SMS dispatch in seconds
    pub sms_timeout_seconds: u64,

    /// bcrypt cost used when hashing registration passwords
    pub bcrypt_cost: u32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            country_code: String::from("998"),
            code_ttl_seconds: 120,
            throttle_seconds: 60,
            sms_timeout_seconds: 10,
            bcrypt_cost: 10,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// OTP configuration
    #[serde(default)]
    pub otp: OtpConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = OtpConfig::default();
        let jwt_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let session_expiry = env_or("JWT_EXPIRY_SECONDS", 86_400);

        Self {
            jwt: JwtConfig {
                secret: jwt_secret,
                session_expiry,
                issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "phoneauth".to_string()),
            },
            otp: OtpConfig {
                country_code: std::env::var("OTP_COUNTRY_CODE")
                    .unwrap_or(defaults.country_code),
                code_ttl_seconds: env_or("OTP_CODE_TTL_SECONDS", defaults.code_ttl_seconds),
                throttle_seconds: env_or("OTP_THROTTLE_SECONDS", defaults.throttle_seconds),
                sms_timeout_seconds: env_or("SMS_TIMEOUT_SECONDS", defaults.sms_timeout_seconds),
                bcrypt_cost: env_or("BCRYPT_COST", defaults.bcrypt_cost),
            },
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.session_expiry, 86_400);
        assert_eq!(config.issuer, "phoneauth");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiry_hours(1);
        assert_eq!(config.session_expiry, 3600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_otp_config_default() {
        let config = OtpConfig::default();
        assert_eq!(config.country_code, "998");
        assert_eq!(config.code_ttl_seconds, 120);
        assert_eq!(config.throttle_seconds, 60);
        assert_eq!(config.bcrypt_cost, 10);
    }
}
