//! SMS Service Module
//!
//! Providers for delivering verification codes, plus an adapter exposing
//! them through the core `SmsServiceTrait`.

use std::sync::Arc;

use pa_shared::config::{Environment, SmsConfig};

use crate::InfrastructureError;

pub mod adapter;
pub mod mock_sms;
pub mod sms_service;

#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use adapter::SmsServiceAdapter;
pub use mock_sms::MockSmsService;
pub use sms_service::{verification_message, SmsService};

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

#[cfg(test)]
mod tests;

/// Create an SMS service for the configured provider
///
/// Outside production, unknown providers and providers that fail to
/// initialize fall back to the mock service with an error log. Production
/// never uses the mock: it would report every send as delivered.
///
/// # Errors
/// * `InfrastructureError::Config` - Production with a mock, unknown or
///   misconfigured provider
pub fn create_sms_service(
    config: &SmsConfig,
    environment: Environment,
) -> Result<Arc<dyn SmsService>, InfrastructureError> {
    let fallback = |reason: String| -> Result<Arc<dyn SmsService>, InfrastructureError> {
        if environment.is_production() {
            return Err(InfrastructureError::Config(reason));
        }
        tracing::warn!("{}, using mock SMS service", reason);
        Ok(Arc::new(MockSmsService::new()))
    };

    match config.provider.as_str() {
        "mock" => fallback("SMS_PROVIDER is 'mock'".to_string()),
        #[cfg(feature = "twilio-sms")]
        "twilio" => match TwilioConfig::from_sms_config(config).and_then(TwilioSmsService::new) {
            Ok(service) => Ok(Arc::new(service)),
            Err(e) => {
                tracing::error!("Failed to initialize Twilio SMS service: {}", e);
                fallback(format!("Twilio SMS service unavailable: {}", e))
            }
        },
        other => fallback(format!("Unknown SMS provider '{}'", other)),
    }
}
