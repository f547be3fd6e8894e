//! Mock SMS Service Implementation
//!
//! Logs messages instead of sending them and remembers the last message per
//! phone so integration tests can read back the code.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use uuid::Uuid;

use pa_shared::utils::phone::{is_e164, mask_phone_number};

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// Mock SMS service for development and testing
#[derive(Clone, Default)]
pub struct MockSmsService {
    message_count: Arc<AtomicU64>,
    last_messages: Arc<Mutex<HashMap<String, String>>>,
    simulate_failure: bool,
    /// Log message bodies, codes included
    console_output: bool,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self {
            console_output: true,
            ..Self::default()
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            console_output,
            simulate_failure,
            ..Self::default()
        }
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Last message body sent to `phone`
    pub fn last_message_for(&self, phone: &str) -> Option<String> {
        self.last_messages
            .lock()
            .ok()
            .and_then(|messages| messages.get(phone).cloned())
    }

    /// Six-digit code contained in the last message sent to `phone`
    pub fn last_code_for(&self, phone: &str) -> Option<String> {
        let message = self.last_message_for(phone)?;
        message
            .split(|c: char| !c.is_ascii_digit())
            .find(|chunk| chunk.len() == 6)
            .map(str::to_string)
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        if !is_e164(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone_number(phone_number)
            )));
        }

        if self.simulate_failure {
            warn!(
                "Mock SMS service simulating failure for phone: {}",
                mask_phone_number(phone_number)
            );
            return Err(InfrastructureError::Sms("Simulated SMS failure".to_string()));
        }

        if let Ok(mut messages) = self.last_messages.lock() {
            messages.insert(phone_number.to_string(), message.to_string());
        }
        self.message_count.fetch_add(1, Ordering::SeqCst);

        let message_id = format!("mock_{}", Uuid::new_v4());
        info!(
            phone = %mask_phone_number(phone_number),
            message_id = %message_id,
            "[MOCK SMS] Message accepted"
        );
        if self.console_output {
            debug!("[MOCK SMS] {}", message);
        }

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
