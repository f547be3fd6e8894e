//! TTL cache adapters for one-time codes, cooldown markers and the token denylist

pub mod memory_cache;
pub mod redis_cache;
pub mod redis_client;

#[cfg(test)]
mod tests;

pub use memory_cache::InMemoryTtlCache;
pub use redis_cache::RedisTtlCache;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use pa_shared::config::CacheConfig;
