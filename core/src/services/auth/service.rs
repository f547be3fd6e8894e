//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use pa_shared::utils::phone::mask_phone_number;

use crate::domain::entities::otp_entry::PendingRegistration;
use crate::domain::entities::token::SessionToken;
use crate::domain::entities::user::UserProfile;
use crate::domain::value_objects::CanonicalPhone;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::otp::{IssueOtpResult, OtpIssuer, OtpServiceConfig, OtpVerifier, VerifyOtpResult};
use crate::services::session::{RevokeResult, SessionIssuer, SessionRevoker, TokenService};
use crate::services::traits::{CacheServiceTrait, SmsServiceTrait};

use super::config::AuthServiceConfig;

/// Authentication service for managing the complete authentication flow
pub struct AuthService<U, S, C>
where
    U: UserRepository,
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    otp_issuer: OtpIssuer<S, C>,
    otp_verifier: OtpVerifier<U, C>,
    session_issuer: SessionIssuer<U>,
    session_revoker: SessionRevoker<C>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, S, C> AuthService<U, S, C>
where
    U: UserRepository,
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `sms_service` - SMS channel for code delivery
    /// * `cache_service` - TTL cache for codes, cooldowns and the denylist
    /// * `token_service` - Session token signing
    /// * `otp_config` - Code lifetime, cooldown and dispatch timeout
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        sms_service: Arc<S>,
        cache_service: Arc<C>,
        token_service: Arc<TokenService>,
        otp_config: OtpServiceConfig,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            otp_issuer: OtpIssuer::new(sms_service, cache_service.clone(), otp_config.clone()),
            otp_verifier: OtpVerifier::new(user_repository.clone(), cache_service.clone(), otp_config),
            session_issuer: SessionIssuer::new(user_repository.clone(), token_service.clone()),
            session_revoker: SessionRevoker::new(cache_service, token_service),
            user_repository,
            config,
        }
    }

    fn canonical(&self, phone: &str) -> DomainResult<CanonicalPhone> {
        CanonicalPhone::parse_with_country_code(phone, &self.config.country_code)
    }

    /// Start a registration
    ///
    /// The password is hashed now and travels with the OTP entry, so nothing
    /// is written to the user store until the code is verified.
    ///
    /// # Errors
    ///
    /// * `AuthError::AlreadyRegistered` - A verified user owns this phone
    /// * Any error from OTP issuance
    pub async fn register(
        &self,
        phone: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> DomainResult<IssueOtpResult> {
        let phone = self.canonical(phone)?;

        if let Some(user) = self.user_repository.find_by_phone(phone.as_str()).await? {
            if user.is_verified {
                tracing::info!(
                    phone = %mask_phone_number(phone.as_str()),
                    event = "register_existing",
                    "Registration attempted for verified phone"
                );
                return Err(AuthError::AlreadyRegistered.into());
            }
        }

        let password_hash = self.hash_password(password).await?;
        let pending = PendingRegistration {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            password_hash,
        };

        self.otp_issuer.issue(phone.as_str(), Some(pending)).await
    }

    /// Issue a code without registration data
    pub async fn send_otp(&self, phone: &str) -> DomainResult<IssueOtpResult> {
        self.otp_issuer.issue(phone, None).await
    }

    /// Verify a code and finalize the account
    pub async fn verify_otp(&self, phone: &str, code: &str) -> DomainResult<VerifyOtpResult> {
        self.otp_verifier.verify(phone, code).await
    }

    /// Password login for a verified account
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - No account for this phone
    /// * `AuthError::InvalidCredentials` - Password mismatch
    /// * `AuthError::NotVerified` - Account never confirmed its phone
    pub async fn login(&self, phone: &str, password: &str) -> DomainResult<SessionToken> {
        let phone = self.canonical(phone)?;

        let user = self
            .user_repository
            .find_by_phone(phone.as_str())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.verify_password(password, &user.password_hash).await? {
            tracing::warn!(
                phone = %mask_phone_number(phone.as_str()),
                event = "login_failed",
                "Password mismatch"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        self.session_issuer.issue(user.id, &user.phone).await
    }

    /// Read the caller's profile
    pub async fn profile(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(user.profile())
    }

    /// Update the caller's names, keeping fields that are `None`
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> DomainResult<UserProfile> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.update_names(first_name, last_name);

        let user = self.user_repository.update(user).await.map_err(|e| match e {
            DomainError::NotFound { .. } => AuthError::UserNotFound.into(),
            other => other,
        })?;

        tracing::info!(user_id = %user_id, event = "profile_updated", "Profile updated");
        Ok(user.profile())
    }

    /// Revoke a session token
    pub async fn logout(&self, token: &str) -> DomainResult<RevokeResult> {
        self.session_revoker.revoke(token).await
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to hash password: {}", e),
            })
    }

    async fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to verify password: {}", e),
            })
    }
}
