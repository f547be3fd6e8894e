//! Configuration for session tokens

use pa_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// `iss` claim written and required
    pub issuer: String,
    /// Token lifetime in seconds
    pub session_expiry_seconds: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: "phoneauth".to_string(),
            session_expiry_seconds: 86_400,
        }
    }
}

impl From<&JwtConfig> for SessionConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            issuer: config.issuer.clone(),
            session_expiry_seconds: config.session_expiry,
        }
    }
}
