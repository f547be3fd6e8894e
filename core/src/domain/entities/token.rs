//! Session token claims.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the session JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Canonical phone number of the user
    pub phone: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID, unique per token so two tokens minted in the same second differ
    pub jti: String,
}

impl Claims {
    /// Creates claims for a session token expiring `lifetime_seconds` from now
    pub fn new_session(user_id: Uuid, phone: &str, issuer: &str, lifetime_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(lifetime_seconds);

        Self {
            sub: user_id.to_string(),
            phone: phone.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// A minted session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    /// The encoded JWT
    pub token: String,

    /// Lifetime in seconds
    pub expires_in: i64,
}
