//! Redis-backed implementation of the core TTL cache port

use async_trait::async_trait;
use std::time::Duration;

use pa_core::services::{CacheServiceTrait, HealthCheck};
use pa_shared::config::CacheConfig;

use super::redis_client::RedisClient;

/// TTL cache shared by every API instance through Redis
#[derive(Clone)]
pub struct RedisTtlCache {
    client: RedisClient,
    config: CacheConfig,
}

impl RedisTtlCache {
    pub fn new(client: RedisClient, config: CacheConfig) -> Self {
        Self { client, config }
    }

    /// Connect and wrap in one step
    pub async fn connect(config: CacheConfig) -> Result<Self, crate::InfrastructureError> {
        let client = RedisClient::new(&config).await?;
        Ok(Self::new(client, config))
    }
}

/// Redis rejects `PX 0`, so sub-millisecond TTLs round up
pub(crate) fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl CacheServiceTrait for RedisTtlCache {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client
            .get(&self.config.make_key(key))
            .await
            .map_err(|e| e.to_string())
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String> {
        self.client
            .set_with_expiry_ms(&self.config.make_key(key), value, ttl_millis(ttl))
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        self.client
            .delete(&self.config.make_key(key))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl HealthCheck for RedisTtlCache {
    fn name(&self) -> &'static str {
        "cache"
    }

    async fn is_healthy(&self) -> bool {
        self.client.health_check().await.unwrap_or(false)
    }
}
