//! Unit tests for the core trait adapter

use std::sync::Arc;

use pa_core::services::SmsServiceTrait;

use crate::sms::{MockSmsService, SmsServiceAdapter};

#[tokio::test]
async fn test_adapter_forwards_code() {
    let mock = MockSmsService::with_options(false, false);
    let adapter = SmsServiceAdapter::new(Arc::new(mock.clone()));

    adapter
        .send_verification_code("+998901234567", "123456")
        .await
        .unwrap();

    assert_eq!(mock.last_code_for("+998901234567"), Some("123456".to_string()));
    assert_eq!(adapter.provider_name(), "Mock");
}

#[tokio::test]
async fn test_adapter_stringifies_errors() {
    let adapter = SmsServiceAdapter::new(Arc::new(MockSmsService::with_options(false, true)));

    let err = adapter
        .send_verification_code("+998901234567", "123456")
        .await
        .unwrap_err();
    assert!(err.contains("Simulated SMS failure"));
}
