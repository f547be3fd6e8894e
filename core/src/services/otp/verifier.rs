//! OTP verification and completion of pending registrations

use std::sync::Arc;

use constant_time_eq::constant_time_eq;

use pa_shared::utils::phone::mask_phone_number;

use crate::domain::entities::otp_entry::{OtpEntry, PendingRegistration};
use crate::domain::entities::user::User;
use crate::domain::value_objects::CanonicalPhone;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::keys::{limit_key, otp_key};
use crate::services::traits::CacheServiceTrait;

use super::config::OtpServiceConfig;
use super::issuer::cache_error;
use super::types::VerifyOtpResult;

/// Compare a stored code with a submitted one in constant time.
/// An empty stored code never matches.
pub fn codes_match(stored: &str, submitted: &str) -> bool {
    if stored.is_empty() || stored.len() != submitted.len() {
        return false;
    }
    constant_time_eq(stored.as_bytes(), submitted.as_bytes())
}

/// Verifies submitted codes and finalizes the matching user
pub struct OtpVerifier<U: UserRepository, C: CacheServiceTrait> {
    user_repository: Arc<U>,
    cache_service: Arc<C>,
    config: OtpServiceConfig,
}

impl<U: UserRepository, C: CacheServiceTrait> OtpVerifier<U, C> {
    pub fn new(user_repository: Arc<U>, cache_service: Arc<C>, config: OtpServiceConfig) -> Self {
        Self {
            user_repository,
            cache_service,
            config,
        }
    }

    /// Verify `code` for `phone`
    ///
    /// On a match the user is created from the pending registration or marked
    /// verified, then both cache keys for the phone are removed. A mismatch
    /// leaves the entry and its TTL untouched.
    ///
    /// # Errors
    ///
    /// * `AuthError::CodeExpiredOrMissing` - No live code for this phone
    /// * `AuthError::InvalidCode` - Code does not match
    /// * `AuthError::MissingRegistrationData` - No user and no pending registration
    /// * `AuthError::Conflict` - A concurrent verification created the user first
    pub async fn verify(&self, phone: &str, code: &str) -> DomainResult<VerifyOtpResult> {
        let phone = CanonicalPhone::parse_with_country_code(phone, &self.config.country_code)?;
        let masked = mask_phone_number(phone.as_str());

        let raw = self
            .cache_service
            .get(&otp_key(phone.as_str()))
            .await
            .map_err(|e| cache_error("read OTP entry", e))?
            .ok_or_else(|| {
                tracing::info!(phone = %masked, event = "otp_missing", "No live code for phone");
                AuthError::CodeExpiredOrMissing
            })?;

        let entry = OtpEntry::from_cache_value(&raw);
        if !codes_match(&entry.code, code) {
            tracing::warn!(
                phone = %masked,
                event = "otp_verification_failed",
                "Verification code mismatch"
            );
            return Err(AuthError::InvalidCode.into());
        }

        let (user, created) = self.finalize_user(&phone, entry.pending).await?;

        self.clear(&phone).await;

        tracing::info!(
            phone = %masked,
            user_id = %user.id,
            created = created,
            event = "otp_verified_success",
            "Verification code successfully verified"
        );

        Ok(VerifyOtpResult {
            success: true,
            user_id: user.id,
            created,
        })
    }

    async fn finalize_user(
        &self,
        phone: &CanonicalPhone,
        pending: Option<PendingRegistration>,
    ) -> DomainResult<(User, bool)> {
        if let Some(mut user) = self.user_repository.find_by_phone(phone.as_str()).await? {
            user.verify();
            match self.user_repository.update(user).await {
                Ok(user) => return Ok((user, false)),
                // Removed by the sweep between lookup and update
                Err(DomainError::NotFound { .. }) => {
                    tracing::warn!(
                        phone = %mask_phone_number(phone.as_str()),
                        event = "user_vanished",
                        "User disappeared during verification"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        let pending = pending.ok_or(AuthError::MissingRegistrationData)?;
        let user = User::from_pending(phone.as_str().to_string(), pending);

        match self.user_repository.create(user).await {
            Ok(user) => Ok((user, true)),
            Err(DomainError::Conflict { .. }) => {
                tracing::warn!(
                    phone = %mask_phone_number(phone.as_str()),
                    event = "registration_conflict",
                    "Concurrent registration created the user first"
                );
                Err(AuthError::Conflict.into())
            }
            Err(e) => Err(e),
        }
    }

    async fn clear(&self, phone: &CanonicalPhone) {
        let entries = [
            ("otp", otp_key(phone.as_str())),
            ("limit", limit_key(phone.as_str())),
        ];
        for (entry, key) in entries {
            if let Err(e) = self.cache_service.delete(&key).await {
                tracing::warn!(
                    phone = %mask_phone_number(phone.as_str()),
                    entry,
                    error = %e,
                    "Failed to clear OTP cache entry"
                );
            }
        }
    }
}
