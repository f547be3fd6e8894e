//! Unit tests for the access guard

use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::errors::{DomainError, TokenError};
use crate::services::keys::denylist_key;
use crate::services::mocks::MockCacheService;
use crate::services::session::{bearer_token, AccessGuard, Authorizer, SessionConfig, TokenService};

fn guard() -> (AccessGuard<MockCacheService>, Arc<MockCacheService>, Arc<TokenService>) {
    let cache = Arc::new(MockCacheService::new(false));
    let tokens = Arc::new(TokenService::new(SessionConfig::default()));
    (AccessGuard::new(cache.clone(), tokens.clone()), cache, tokens)
}

fn assert_token_error(result: Result<impl std::fmt::Debug, DomainError>, expected: TokenError) {
    match result {
        Err(DomainError::Token(e)) => assert_eq!(e, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn test_valid_token_yields_principal() {
    let (guard, _, tokens) = guard();
    let user_id = Uuid::new_v4();
    let session = tokens.mint(user_id, "+998901234567").unwrap();
    let header = format!("Bearer {}", session.token);

    let principal = guard.authorize(Some(&header)).await.unwrap();

    assert_eq!(principal.user_id, user_id);
    assert_eq!(principal.phone, "+998901234567");
}

#[tokio::test]
async fn test_malformed_headers() {
    let (guard, _, tokens) = guard();
    let token = tokens.mint(Uuid::new_v4(), "+998901234567").unwrap().token;

    assert_token_error(guard.authorize(None).await, TokenError::MalformedCredential);
    assert_token_error(guard.authorize(Some(&token)).await, TokenError::MalformedCredential);
    assert_token_error(
        guard.authorize(Some(&format!("Basic {}", token))).await,
        TokenError::MalformedCredential,
    );
    assert_token_error(guard.authorize(Some("Bearer")).await, TokenError::MalformedCredential);
    assert_token_error(guard.authorize(Some("Bearer   ")).await, TokenError::MalformedCredential);
}

#[tokio::test]
async fn test_expired_token_is_invalid() {
    let (guard, _, tokens) = guard();
    let token = tokens
        .mint_with_lifetime(Uuid::new_v4(), "+998901234567", -5)
        .unwrap()
        .token;

    assert_token_error(
        guard.authorize(Some(&format!("Bearer {}", token))).await,
        TokenError::InvalidOrExpired,
    );
}

#[tokio::test]
async fn test_denylist_checked_before_signature() {
    let (guard, cache, _) = guard();
    // Not a valid JWT at all: only the denylist can produce Revoked
    cache.insert_raw(&denylist_key("forged"), "true", Duration::from_secs(60));

    assert_token_error(guard.authorize(Some("Bearer forged")).await, TokenError::Revoked);
}

#[tokio::test]
async fn test_cache_failure_is_internal() {
    let cache = Arc::new(MockCacheService::new(true));
    let tokens = Arc::new(TokenService::new(SessionConfig::default()));
    let guard = AccessGuard::new(cache, tokens.clone());
    let token = tokens.mint(Uuid::new_v4(), "+998901234567").unwrap().token;

    let result = guard.authorize(Some(&format!("Bearer {}", token))).await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[test]
fn test_bearer_token_extraction() {
    assert_eq!(bearer_token(Some("Bearer abc")), Ok("abc"));
    assert_eq!(bearer_token(Some("bearer abc")), Err(TokenError::MalformedCredential));
    assert_eq!(bearer_token(None), Err(TokenError::MalformedCredential));
}
