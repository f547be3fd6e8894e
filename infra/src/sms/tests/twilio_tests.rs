//! Unit tests for the Twilio provider that do not hit the network

use reqwest::StatusCode;

use pa_shared::config::SmsConfig;

use crate::sms::twilio::{classify_status, FailureKind, TwilioConfig, TwilioSmsService};
use crate::sms::SmsService;
use crate::InfrastructureError;

fn sms_config() -> SmsConfig {
    SmsConfig {
        provider: "twilio".to_string(),
        api_key: "AC123".to_string(),
        api_secret: "token".to_string(),
        from_number: "+15005550006".to_string(),
    }
}

#[test]
fn test_config_from_sms_config() {
    let config = TwilioConfig::from_sms_config(&sms_config()).unwrap();
    assert_eq!(config.account_sid, "AC123");
    assert_eq!(
        config.messages_url(),
        "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
    );
}

#[test]
fn test_config_rejects_bad_sender() {
    let mut config = sms_config();
    config.from_number = "15005550006".to_string();
    assert!(matches!(
        TwilioConfig::from_sms_config(&config),
        Err(InfrastructureError::Config(_))
    ));
}

#[test]
fn test_status_classification() {
    assert_eq!(classify_status(StatusCode::TOO_MANY_REQUESTS), FailureKind::Retry);
    assert_eq!(classify_status(StatusCode::BAD_GATEWAY), FailureKind::Retry);
    assert_eq!(classify_status(StatusCode::BAD_REQUEST), FailureKind::Fatal);
    assert_eq!(classify_status(StatusCode::UNAUTHORIZED), FailureKind::Fatal);
}

#[tokio::test]
async fn test_send_validates_before_network() {
    let service = TwilioSmsService::new(TwilioConfig::from_sms_config(&sms_config()).unwrap()).unwrap();

    let bad_phone = service.send_sms("12345", "hi").await;
    assert!(matches!(bad_phone, Err(InfrastructureError::Sms(_))));

    let long = "x".repeat(1601);
    let too_long = service.send_sms("+998901234567", &long).await;
    assert!(matches!(too_long, Err(InfrastructureError::Sms(_))));
}
