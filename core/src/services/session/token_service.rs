//! JWT encoding and decoding for session tokens

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, SessionToken};
use crate::errors::{DomainError, TokenError};

use super::config::SessionConfig;

/// Only the expiry is needed when revoking
#[derive(Debug, Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

/// Mints and checks HS256 session tokens
pub struct TokenService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_only: Validation,
}

impl TokenService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.leeway = 0;

        let mut expiry_only = Validation::new(Algorithm::HS256);
        expiry_only.insecure_disable_signature_validation();
        expiry_only.validate_exp = false;
        expiry_only.validate_aud = false;
        expiry_only.required_spec_claims.clear();

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            expiry_only,
        }
    }

    /// Session lifetime in seconds
    pub fn session_expiry_seconds(&self) -> i64 {
        self.config.session_expiry_seconds
    }

    /// Mint a token with the configured lifetime
    pub fn mint(&self, user_id: Uuid, phone: &str) -> Result<SessionToken, DomainError> {
        self.mint_with_lifetime(user_id, phone, self.config.session_expiry_seconds)
    }

    /// Mint a token expiring `lifetime_seconds` from now
    pub fn mint_with_lifetime(
        &self,
        user_id: Uuid,
        phone: &str,
        lifetime_seconds: i64,
    ) -> Result<SessionToken, DomainError> {
        let claims = Claims::new_session(user_id, phone, &self.config.issuer, lifetime_seconds);
        let token = self.encode_jwt(&claims)?;
        Ok(SessionToken {
            token,
            expires_in: lifetime_seconds,
        })
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verify signature, issuer and expiry with zero leeway
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Session token rejected");
                TokenError::InvalidOrExpired
            })
    }

    /// Read the `exp` claim without checking the signature
    pub fn decode_expiry(&self, token: &str) -> Result<i64, TokenError> {
        let data = decode::<ExpiryClaim>(token, &self.decoding_key, &self.expiry_only)
            .map_err(|_| TokenError::MalformedToken)?;
        data.claims.exp.ok_or(TokenError::MalformedToken)
    }
}
