//! Unit tests for the in-memory TTL cache

use std::time::Duration;

use pa_core::services::CacheServiceTrait;

use crate::cache::InMemoryTtlCache;

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let cache = InMemoryTtlCache::new();
    cache
        .set("limit_+998901234567", "true", Duration::from_secs(60))
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(59)).await;
    assert_eq!(
        cache.get("limit_+998901234567").await.unwrap(),
        Some("true".to_string())
    );

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(cache.get("limit_+998901234567").await.unwrap(), None);
    assert!(cache.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_set_replaces_value_and_ttl() {
    let cache = InMemoryTtlCache::new();
    cache.set("otp_x", "first", Duration::from_secs(10)).await.unwrap();
    tokio::time::advance(Duration::from_secs(8)).await;
    cache.set("otp_x", "second", Duration::from_secs(10)).await.unwrap();
    tokio::time::advance(Duration::from_secs(8)).await;

    assert_eq!(cache.get("otp_x").await.unwrap(), Some("second".to_string()));
}

#[tokio::test]
async fn test_delete_missing_key_is_ok() {
    let cache = InMemoryTtlCache::new();
    assert!(cache.delete("bl_missing").await.is_ok());

    cache.set("bl_token", "true", Duration::from_secs(5)).await.unwrap();
    cache.delete("bl_token").await.unwrap();
    assert_eq!(cache.get("bl_token").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_purge_expired() {
    let cache = InMemoryTtlCache::new();
    cache.set("a", "1", Duration::from_secs(1)).await.unwrap();
    cache.set("b", "2", Duration::from_secs(100)).await.unwrap();
    tokio::time::advance(Duration::from_secs(5)).await;

    assert_eq!(cache.purge_expired().await, 1);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_purge_task_drops_unread_expired_entries() {
    let cache = InMemoryTtlCache::new();
    for i in 0..100 {
        cache
            .set(&format!("bl_token{}", i), "1", Duration::from_secs(1))
            .await
            .unwrap();
    }
    cache.set("otp_live", "1", Duration::from_secs(7200)).await.unwrap();

    let handle = cache.start_purge_task(Duration::from_secs(60));
    tokio::time::sleep(Duration::from_secs(3600)).await;

    assert_eq!(cache.len().await, 1);
    assert_eq!(cache.get("otp_live").await.unwrap(), Some("1".to_string()));
    handle.abort();
}
