//! Unit tests for OTP issuance

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::otp_entry::{OtpEntry, PendingRegistration};
use crate::errors::{AuthError, DomainError};
use crate::services::keys::{limit_key, otp_key};
use crate::services::mocks::{MockCacheService, MockSmsService};
use crate::services::otp::{generate_code, OtpIssuer, OtpServiceConfig};
use crate::services::traits::CacheServiceTrait;

const PHONE: &str = "+998901234567";

fn issuer(
    sms: Arc<MockSmsService>,
    cache: Arc<MockCacheService>,
) -> OtpIssuer<MockSmsService, MockCacheService> {
    OtpIssuer::new(sms, cache, OtpServiceConfig::default())
}

#[tokio::test]
async fn test_issue_stores_entry_and_cooldown() {
    let sms = Arc::new(MockSmsService::new(false));
    let cache = Arc::new(MockCacheService::new(false));
    let issuer = issuer(sms.clone(), cache.clone());

    let result = issuer.issue("90 123 45 67", None).await.unwrap();

    assert_eq!(result.phone, PHONE);
    assert_eq!(result.expires_in, 120);
    assert!(result.message_id.starts_with("mock-msg-"));

    let sent = sms.get_sent_code(PHONE).expect("code dispatched");
    let raw = cache.get(&otp_key(PHONE)).await.unwrap().unwrap();
    let entry = OtpEntry::from_cache_value(&raw);
    assert_eq!(entry.code, sent);
    assert!(entry.pending.is_none());

    assert_eq!(cache.ttl_of(&otp_key(PHONE)), Some(Duration::from_secs(120)));
    assert_eq!(cache.ttl_of(&limit_key(PHONE)), Some(Duration::from_secs(60)));
}

#[tokio::test]
async fn test_issue_carries_pending_registration() {
    let sms = Arc::new(MockSmsService::new(false));
    let cache = Arc::new(MockCacheService::new(false));
    let issuer = issuer(sms, cache.clone());

    let pending = PendingRegistration {
        first_name: "Ali".to_string(),
        last_name: "Valiyev".to_string(),
        password_hash: "hash".to_string(),
    };
    issuer.issue(PHONE, Some(pending.clone())).await.unwrap();

    let raw = cache.get(&otp_key(PHONE)).await.unwrap().unwrap();
    assert_eq!(OtpEntry::from_cache_value(&raw).pending, Some(pending));
}

#[tokio::test(start_paused = true)]
async fn test_reissue_within_cooldown_is_rate_limited() {
    let sms = Arc::new(MockSmsService::new(false));
    let cache = Arc::new(MockCacheService::new(false));
    let issuer = issuer(sms.clone(), cache);

    issuer.issue(PHONE, None).await.unwrap();
    tokio::time::advance(Duration::from_secs(30)).await;

    let result = issuer.issue(PHONE, None).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::RateLimited))));
    assert_eq!(sms.sent_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reissue_after_cooldown_overwrites_code() {
    let sms = Arc::new(MockSmsService::new(false));
    let cache = Arc::new(MockCacheService::new(false));
    let issuer = issuer(sms.clone(), cache.clone());

    issuer.issue(PHONE, None).await.unwrap();
    tokio::time::advance(Duration::from_secs(61)).await;

    issuer.issue(PHONE, None).await.unwrap();

    let latest = sms.get_sent_code(PHONE).unwrap();
    let raw = cache.get(&otp_key(PHONE)).await.unwrap().unwrap();
    assert_eq!(OtpEntry::from_cache_value(&raw).code, latest);
}

#[tokio::test]
async fn test_delivery_failure_keeps_cache_writes() {
    let sms = Arc::new(MockSmsService::new(true));
    let cache = Arc::new(MockCacheService::new(false));
    let issuer = issuer(sms, cache.clone());

    let result = issuer.issue(PHONE, None).await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::DeliveryFailed))));
    assert!(cache.contains(&otp_key(PHONE)));
    assert!(cache.contains(&limit_key(PHONE)));

    let retry = issuer.issue(PHONE, None).await;
    assert!(matches!(retry, Err(DomainError::Auth(AuthError::RateLimited))));
}

#[tokio::test(start_paused = true)]
async fn test_slow_delivery_times_out() {
    let sms = Arc::new(MockSmsService::with_delay(Duration::from_secs(30)));
    let cache = Arc::new(MockCacheService::new(false));
    let issuer = issuer(sms.clone(), cache);

    let result = issuer.issue(PHONE, None).await;

    assert!(matches!(result, Err(DomainError::Auth(AuthError::DeliveryFailed))));
    assert_eq!(sms.sent_count(), 0);
}

#[tokio::test]
async fn test_cache_failure_is_internal() {
    let sms = Arc::new(MockSmsService::new(false));
    let cache = Arc::new(MockCacheService::new(true));
    let issuer = issuer(sms.clone(), cache);

    let result = issuer.issue(PHONE, None).await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
    assert_eq!(sms.sent_count(), 0);
}

#[tokio::test]
async fn test_issue_rejects_phone_without_digits() {
    let issuer = issuer(
        Arc::new(MockSmsService::new(false)),
        Arc::new(MockCacheService::new(false)),
    );

    let result = issuer.issue("phone", None).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[test]
fn test_generated_codes_are_six_digits() {
    for _ in 0..1000 {
        let code = generate_code();
        assert_eq!(code.len(), 6);
        let value: u32 = code.parse().unwrap();
        assert!((100_000..=999_999).contains(&value));
    }
}
