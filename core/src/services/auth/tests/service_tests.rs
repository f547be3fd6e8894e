//! Unit tests for the authentication service

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::mocks::{MockCacheService, MockSmsService};
use crate::services::otp::OtpServiceConfig;
use crate::services::session::{AccessGuard, SessionConfig, TokenService};

const PHONE: &str = "+998901234567";

type TestAuthService = AuthService<MockUserRepository, MockSmsService, MockCacheService>;

struct Harness {
    sms: Arc<MockSmsService>,
    cache: Arc<MockCacheService>,
    repo: Arc<MockUserRepository>,
    tokens: Arc<TokenService>,
    service: TestAuthService,
}

fn harness() -> Harness {
    let sms = Arc::new(MockSmsService::new(false));
    let cache = Arc::new(MockCacheService::new(false));
    let repo = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(TokenService::new(SessionConfig::default()));
    let service = AuthService::new(
        repo.clone(),
        sms.clone(),
        cache.clone(),
        tokens.clone(),
        OtpServiceConfig::default(),
        AuthServiceConfig {
            bcrypt_cost: 4,
            ..AuthServiceConfig::default()
        },
    );
    Harness {
        sms,
        cache,
        repo,
        tokens,
        service,
    }
}

async fn register_and_verify(h: &Harness) -> Uuid {
    h.service
        .register("90 123 45 67", "Ali", "Valiyev", "secret123")
        .await
        .unwrap();
    let code = h.sms.get_sent_code(PHONE).unwrap();
    h.service.verify_otp(PHONE, &code).await.unwrap().user_id
}

#[tokio::test]
async fn test_register_verify_login_flow() {
    let h = harness();

    let issued = h
        .service
        .register("901234567", "Ali", "Valiyev", "secret123")
        .await
        .unwrap();
    assert_eq!(issued.phone, PHONE);
    assert_eq!(h.repo.count().await, 0);

    let code = h.sms.get_sent_code(PHONE).unwrap();
    let verified = h.service.verify_otp("901234567", &code).await.unwrap();
    assert!(verified.created);

    let user = h.repo.find_by_phone(PHONE).await.unwrap().unwrap();
    assert!(user.is_verified);
    assert_ne!(user.password_hash, "secret123");
    assert!(bcrypt::verify("secret123", &user.password_hash).unwrap());

    let session = h.service.login("998901234567", "secret123").await.unwrap();
    let claims = h.tokens.verify(&session.token).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.phone, PHONE);
}

#[tokio::test]
async fn test_register_verified_phone_is_rejected() {
    let h = harness();
    register_and_verify(&h).await;
    h.cache.entries.lock().unwrap().clear();

    let result = h.service.register(PHONE, "Other", "Person", "pw").await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::AlreadyRegistered))));
}

#[tokio::test]
async fn test_register_is_rate_limited() {
    let h = harness();
    h.service.register(PHONE, "Ali", "Valiyev", "pw").await.unwrap();

    let result = h.service.register(PHONE, "Ali", "Valiyev", "pw").await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::RateLimited))));
}

#[tokio::test]
async fn test_send_otp_for_unknown_phone_needs_registration() {
    let h = harness();
    h.service.send_otp(PHONE).await.unwrap();
    let code = h.sms.get_sent_code(PHONE).unwrap();

    let result = h.service.verify_otp(PHONE, &code).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::MissingRegistrationData))));
}

#[tokio::test]
async fn test_login_errors() {
    let h = harness();

    let missing = h.service.login(PHONE, "secret123").await;
    assert!(matches!(missing, Err(DomainError::Auth(AuthError::UserNotFound))));

    register_and_verify(&h).await;
    let wrong = h.service.login(PHONE, "wrong").await;
    assert!(matches!(wrong, Err(DomainError::Auth(AuthError::InvalidCredentials))));
}

#[tokio::test]
async fn test_login_unverified_user() {
    let h = harness();
    let hash = bcrypt::hash("secret123", 4).unwrap();
    let user = crate::domain::entities::user::User::new(
        PHONE.to_string(),
        "Ali".to_string(),
        "Valiyev".to_string(),
        hash,
    );
    h.repo.create(user).await.unwrap();

    let result = h.service.login(PHONE, "secret123").await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::NotVerified))));
}

#[tokio::test]
async fn test_profile_and_update() {
    let h = harness();
    let user_id = register_and_verify(&h).await;

    let profile = h.service.profile(user_id).await.unwrap();
    assert_eq!(profile.phone, PHONE);
    assert_eq!(profile.first_name, "Ali");
    assert!(profile.is_verified);

    let updated = h
        .service
        .update_profile(user_id, Some("Vali".to_string()), None)
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Vali");
    assert_eq!(updated.last_name, "Valiyev");

    let missing = h.service.profile(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(DomainError::Auth(AuthError::UserNotFound))));
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let h = harness();
    register_and_verify(&h).await;
    let session = h.service.login(PHONE, "secret123").await.unwrap();
    let guard = AccessGuard::new(h.cache.clone(), h.tokens.clone());
    let header = format!("Bearer {}", session.token);
    assert!(guard.authorize_header(Some(&header)).await.is_ok());

    let result = h.service.logout(&session.token).await.unwrap();
    assert!(result.success);

    let after = guard.authorize_header(Some(&header)).await;
    assert!(matches!(after, Err(DomainError::Token(TokenError::Revoked))));
}
