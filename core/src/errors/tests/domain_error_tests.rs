//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_auth_error_messages() {
    assert_eq!(
        AuthError::RateLimited.to_string(),
        "Please wait a minute before requesting a new code"
    );
    assert!(AuthError::CodeExpiredOrMissing.to_string().contains("expired"));
}

#[test]
fn test_domain_error_bridges_auth_and_token() {
    let err: DomainError = AuthError::InvalidCode.into();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCode)));
    assert_eq!(err.to_string(), "Invalid verification code");

    let err: DomainError = TokenError::Revoked.into();
    assert!(matches!(err, DomainError::Token(TokenError::Revoked)));
}

#[test]
fn test_internal_error_message() {
    let err = DomainError::Internal {
        message: "cache unreachable".to_string(),
    };
    assert_eq!(err.to_string(), "Internal error: cache unreachable");
}
