//! Traits for SMS and cache service integration

use std::time::Duration;

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a verification code via SMS, returning the provider message id
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String>;
}

/// Key/value cache where every entry carries its own expiration.
///
/// Operations are atomic per key. There are no multi-key transactions.
#[async_trait]
pub trait CacheServiceTrait: Send + Sync {
    /// Get a live value
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    /// Store a value that expires after `ttl`, replacing any previous value
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String>;
    /// Remove a value; removing a missing key is not an error
    async fn delete(&self, key: &str) -> Result<(), String>;
}

/// Reachability check for a backing service, reported by the health endpoint
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Key under which the result is reported
    fn name(&self) -> &'static str;
    async fn is_healthy(&self) -> bool;
}
