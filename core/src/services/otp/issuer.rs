//! OTP issuance with a per-phone cooldown

use std::sync::Arc;

use rand::{rngs::OsRng, Rng};

use pa_shared::utils::phone::mask_phone_number;

use crate::domain::entities::otp_entry::{OtpEntry, PendingRegistration};
use crate::domain::value_objects::CanonicalPhone;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::keys::{limit_key, otp_key, MARKER_VALUE};
use crate::services::traits::{CacheServiceTrait, SmsServiceTrait};

use super::config::OtpServiceConfig;
use super::types::IssueOtpResult;

/// Generate a uniformly random six-digit code in 100000..=999999 from the OS CSPRNG
pub fn generate_code() -> String {
    OsRng.gen_range(100_000u32..=999_999).to_string()
}

/// Issues one-time codes and dispatches them by SMS
pub struct OtpIssuer<S: SmsServiceTrait, C: CacheServiceTrait> {
    /// SMS service for sending messages
    sms_service: Arc<S>,
    /// Cache holding codes and cooldown markers
    cache_service: Arc<C>,
    config: OtpServiceConfig,
}

impl<S: SmsServiceTrait, C: CacheServiceTrait> OtpIssuer<S, C> {
    pub fn new(sms_service: Arc<S>, cache_service: Arc<C>, config: OtpServiceConfig) -> Self {
        Self {
            sms_service,
            cache_service,
            config,
        }
    }

    /// Issue a code for `phone`, optionally carrying registration data
    ///
    /// The OTP entry and the cooldown marker are both written before the SMS
    /// is dispatched. A failed or timed out dispatch leaves them in place, so
    /// the caller has to wait out the cooldown before retrying.
    ///
    /// # Errors
    ///
    /// * `AuthError::RateLimited` - A code was issued within the cooldown
    /// * `AuthError::DeliveryFailed` - The SMS channel failed or timed out
    /// * `DomainError::Internal` - The cache is unavailable
    pub async fn issue(
        &self,
        phone: &str,
        pending: Option<PendingRegistration>,
    ) -> DomainResult<IssueOtpResult> {
        let phone = CanonicalPhone::parse_with_country_code(phone, &self.config.country_code)?;
        let masked = mask_phone_number(phone.as_str());

        let throttled = self
            .cache_service
            .get(&limit_key(phone.as_str()))
            .await
            .map_err(|e| cache_error("read cooldown marker", e))?;
        if throttled.is_some() {
            tracing::warn!(
                phone = %masked,
                event = "otp_rate_limited",
                "OTP requested during cooldown"
            );
            return Err(AuthError::RateLimited.into());
        }

        let code = generate_code();
        let entry = OtpEntry::new(code.clone(), pending);
        let payload = entry.to_cache_value().map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize OTP entry: {}", e),
        })?;

        self.cache_service
            .set(&otp_key(phone.as_str()), &payload, self.config.code_ttl)
            .await
            .map_err(|e| cache_error("store OTP entry", e))?;
        self.cache_service
            .set(&limit_key(phone.as_str()), MARKER_VALUE, self.config.throttle)
            .await
            .map_err(|e| cache_error("store cooldown marker", e))?;

        tracing::info!(
            phone = %masked,
            registration = entry.pending.is_some(),
            event = "otp_generated",
            "Generated new verification code"
        );

        let dispatch = self.sms_service.send_verification_code(phone.as_str(), &code);
        let message_id = match tokio::time::timeout(self.config.sms_timeout, dispatch).await {
            Ok(Ok(message_id)) => message_id,
            Ok(Err(e)) => {
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "otp_delivery_failed",
                    "SMS provider rejected verification code"
                );
                return Err(AuthError::DeliveryFailed.into());
            }
            Err(_) => {
                tracing::error!(
                    phone = %masked,
                    timeout_secs = self.config.sms_timeout.as_secs(),
                    event = "otp_delivery_timeout",
                    "SMS dispatch timed out"
                );
                return Err(AuthError::DeliveryFailed.into());
            }
        };

        Ok(IssueOtpResult {
            phone: phone.into_string(),
            expires_in: self.config.code_ttl.as_secs(),
            message_id,
        })
    }
}

pub(super) fn cache_error(action: &str, error: String) -> DomainError {
    tracing::error!(error = %error, event = "cache_failure", "Failed to {}", action);
    DomainError::Internal {
        message: format!("Failed to {}: {}", action, error),
    }
}
