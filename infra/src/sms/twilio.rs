//! Twilio SMS Service Implementation
//!
//! Talks to the Twilio Messages REST endpoint with reqwest. Rate-limit and
//! server errors are retried with exponential backoff; client errors are not.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use pa_shared::config::SmsConfig;
use pa_shared::utils::phone::{is_e164, mask_phone_number};

use super::sms_service::SmsService;
use crate::InfrastructureError;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";
const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender number, must be a Twilio number in E.164 form
    pub from_number: String,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub request_timeout_secs: u64,
    /// API root, overridable for tests
    pub api_base: String,
}

impl TwilioConfig {
    /// Build from the generic SMS settings
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(InfrastructureError::Config(
                "SMS_API_KEY and SMS_API_SECRET are required for Twilio".to_string(),
            ));
        }
        if !is_e164(&config.from_number) {
            return Err(InfrastructureError::Config(
                "SMS_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: config.api_key.clone(),
            auth_token: config.api_secret.clone(),
            from_number: config.from_number.clone(),
            max_retries: 3,
            retry_delay_ms: 1000,
            request_timeout_secs: 30,
            api_base: TWILIO_API_BASE.to_string(),
        })
    }

    pub fn messages_url(&self) -> String {
        format!("{}/Accounts/{}/Messages.json", self.api_base, self.account_sid)
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

/// Outcome class of a failed Twilio call
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FailureKind {
    Retry,
    Fatal,
}

pub(crate) fn classify_status(status: StatusCode) -> FailureKind {
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        FailureKind::Retry
    } else {
        FailureKind::Fatal
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Twilio SMS service initialized with from number: {}",
            mask_phone_number(&config.from_number)
        );

        Ok(Self { client, config })
    }

    async fn send_once(&self, to: &str, message: &str) -> Result<String, (FailureKind, String)> {
        let response = self
            .client
            .post(self.config.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", to),
                ("From", self.config.from_number.as_str()),
                ("Body", message),
            ])
            .send()
            .await
            .map_err(|e| (FailureKind::Retry, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err((classify_status(status), format!("{}: {}", status, body)));
        }

        response
            .json::<MessageResponse>()
            .await
            .map(|m| m.sid)
            .map_err(|e| (FailureKind::Fatal, format!("Unexpected Twilio response: {}", e)))
    }

    async fn send_with_retry(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                "Sending SMS attempt {}/{} to {}",
                attempts,
                self.config.max_retries,
                mask_phone_number(to)
            );

            match self.send_once(to, message).await {
                Ok(sid) => {
                    info!("SMS sent to {} with SID: {}", mask_phone_number(to), sid);
                    return Ok(sid);
                }
                Err((FailureKind::Fatal, e)) => {
                    error!("Twilio rejected SMS request: {}", e);
                    return Err(InfrastructureError::Sms(format!("Invalid request: {}", e)));
                }
                Err((FailureKind::Retry, e)) if attempts < self.config.max_retries => {
                    warn!(
                        "Failed to send SMS (attempt {}/{}): {}. Retrying after {:?}",
                        attempts, self.config.max_retries, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err((FailureKind::Retry, e)) => {
                    error!("Failed to send SMS after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Sms(format!(
                        "Failed to send SMS after {} attempts: {}",
                        attempts, e
                    )));
                }
            }
        }
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        if !is_e164(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Phone number must be in E.164 format: {}",
                mask_phone_number(phone_number)
            )));
        }
        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        self.send_with_retry(phone_number, message).await
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
