//! Bridges any infrastructure SMS provider to the core `SmsServiceTrait`

use async_trait::async_trait;
use std::sync::Arc;

use pa_core::services::SmsServiceTrait;

use super::sms_service::SmsService;

#[derive(Clone)]
pub struct SmsServiceAdapter {
    inner: Arc<dyn SmsService>,
}

impl SmsServiceAdapter {
    pub fn new(inner: Arc<dyn SmsService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl SmsServiceTrait for SmsServiceAdapter {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(phone, code)
            .await
            .map_err(|e| e.to_string())
    }
}
