//! Logout by denylisting a token for its remaining lifetime

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

use crate::errors::{DomainError, DomainResult, TokenError};
use crate::services::keys::{denylist_key, MARKER_VALUE};
use crate::services::traits::CacheServiceTrait;

use super::token_service::TokenService;

#[derive(Debug, Clone, Serialize)]
pub struct RevokeResult {
    pub success: bool,
    /// False when the token had already expired and nothing was written
    #[serde(skip)]
    pub denylisted: bool,
}

pub struct SessionRevoker<C: CacheServiceTrait> {
    cache_service: Arc<C>,
    token_service: Arc<TokenService>,
}

impl<C: CacheServiceTrait> SessionRevoker<C> {
    pub fn new(cache_service: Arc<C>, token_service: Arc<TokenService>) -> Self {
        Self {
            cache_service,
            token_service,
        }
    }

    /// Denylist `token` until it would have expired on its own
    ///
    /// The token is decoded without signature verification, so callers must
    /// have passed it through the access guard first.
    pub async fn revoke(&self, token: &str) -> DomainResult<RevokeResult> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TokenError::MalformedCredential.into());
        }

        let exp = self.token_service.decode_expiry(token)?;
        let remaining_ms = exp
            .saturating_mul(1000)
            .saturating_sub(Utc::now().timestamp_millis());

        if remaining_ms <= 0 {
            tracing::info!(event = "logout_expired_token", "Token already expired, nothing to revoke");
            return Ok(RevokeResult {
                success: true,
                denylisted: false,
            });
        }

        self.cache_service
            .set(
                &denylist_key(token),
                MARKER_VALUE,
                Duration::from_millis(remaining_ms as u64),
            )
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to write denylist entry: {}", e),
            })?;

        tracing::info!(
            remaining_ms = remaining_ms,
            event = "session_revoked",
            "Session token denylisted"
        );
        Ok(RevokeResult {
            success: true,
            denylisted: true,
        })
    }
}
