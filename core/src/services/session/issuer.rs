//! Session token issuance for verified users

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::token::SessionToken;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;

use super::token_service::TokenService;

pub struct SessionIssuer<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> SessionIssuer<U> {
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Mint a session token carrying `user_id` and `phone`
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - No such user
    /// * `AuthError::NotVerified` - The user has not confirmed the phone number
    pub async fn issue(&self, user_id: Uuid, phone: &str) -> DomainResult<SessionToken> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_verified {
            tracing::warn!(user_id = %user_id, event = "session_unverified", "Session requested before verification");
            return Err(AuthError::NotVerified.into());
        }

        let session = self.token_service.mint(user.id, phone)?;

        tracing::info!(user_id = %user_id, event = "session_issued", "Issued session token");
        Ok(session)
    }
}
