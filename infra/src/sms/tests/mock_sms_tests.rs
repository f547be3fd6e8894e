//! Unit tests for mock SMS service

use crate::sms::{MockSmsService, SmsService};
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_sms_send_success() {
    let service = MockSmsService::with_options(false, false);
    let message_id = service.send_sms("+998901234567", "Test message").await.unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(
        service.last_message_for("+998901234567"),
        Some("Test message".to_string())
    );
}

#[tokio::test]
async fn test_mock_sms_rejects_non_e164() {
    let service = MockSmsService::new();
    let result = service.send_sms("998901234567", "Test message").await;

    match result {
        Err(InfrastructureError::Sms(msg)) => assert!(msg.contains("Invalid phone number")),
        other => panic!("Expected Sms error, got {:?}", other),
    }
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_sms_simulate_failure() {
    let service = MockSmsService::with_options(false, true);
    assert!(service.send_sms("+998901234567", "Test").await.is_err());
    assert!(!service.is_available().await);
}

#[tokio::test]
async fn test_last_code_for_reads_verification_message() {
    let service = MockSmsService::with_options(false, false);
    service
        .send_verification_code("+998901234567", "482913")
        .await
        .unwrap();

    assert_eq!(service.last_code_for("+998901234567"), Some("482913".to_string()));
    assert_eq!(service.last_code_for("+998900000000"), None);
}
