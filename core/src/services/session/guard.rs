//! Access guard for protected operations

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult, TokenError};
use crate::services::keys::denylist_key;
use crate::services::traits::CacheServiceTrait;

use super::token_service::TokenService;

/// Caller identity decoded from a valid session token, scoped to one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub phone: String,
}

/// Object-safe view of the guard for the HTTP layer
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Authorize a raw `Authorization` header value
    async fn authorize(&self, header: Option<&str>) -> DomainResult<Principal>;
}

/// Extract the token from `Bearer <token>`
pub fn bearer_token(header: Option<&str>) -> Result<&str, TokenError> {
    let token = header
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or(TokenError::MalformedCredential)?;
    if token.is_empty() {
        return Err(TokenError::MalformedCredential);
    }
    Ok(token)
}

pub struct AccessGuard<C: CacheServiceTrait> {
    cache_service: Arc<C>,
    token_service: Arc<TokenService>,
}

impl<C: CacheServiceTrait> AccessGuard<C> {
    pub fn new(cache_service: Arc<C>, token_service: Arc<TokenService>) -> Self {
        Self {
            cache_service,
            token_service,
        }
    }

    /// Check the denylist, then signature and expiry
    ///
    /// # Errors
    ///
    /// * `TokenError::MalformedCredential` - Header absent or not `Bearer <token>`
    /// * `TokenError::Revoked` - Token is on the denylist
    /// * `TokenError::InvalidOrExpired` - Signature, expiry or claims check failed
    pub async fn authorize_header(&self, header: Option<&str>) -> DomainResult<Principal> {
        let token = bearer_token(header)?;

        let revoked = self
            .cache_service
            .get(&denylist_key(token))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to read denylist: {}", e),
            })?;
        if revoked.is_some() {
            tracing::warn!(event = "revoked_token_used", "Rejected revoked session token");
            return Err(TokenError::Revoked.into());
        }

        let claims = self.token_service.verify(token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| TokenError::InvalidOrExpired)?;

        Ok(Principal {
            user_id,
            phone: claims.phone,
        })
    }
}

#[async_trait]
impl<C: CacheServiceTrait> Authorizer for AccessGuard<C> {
    async fn authorize(&self, header: Option<&str>) -> DomainResult<Principal> {
        self.authorize_header(header).await
    }
}
