//! Mock collaborators shared by the service tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

use crate::services::traits::{CacheServiceTrait, SmsServiceTrait};

// Mock SMS service for testing
pub struct MockSmsService {
    pub sent_messages: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
    /// Simulated provider latency
    pub delay: Option<Duration>,
}

impl MockSmsService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
            delay: None,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(false)
        }
    }

    pub fn get_sent_code(&self, phone: &str) -> Option<String> {
        self.sent_messages.lock().unwrap().get(phone).cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail {
            return Err("SMS service error".to_string());
        }
        self.sent_messages
            .lock()
            .unwrap()
            .insert(phone.to_string(), code.to_string());
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}

// Mock TTL cache driven by the tokio clock so tests can pause and advance time
pub struct MockCacheService {
    pub entries: Arc<Mutex<HashMap<String, (String, Instant)>>>,
    /// TTL passed on the most recent `set` of each key
    pub ttls: Arc<Mutex<HashMap<String, Duration>>>,
    pub should_fail: bool,
}

impl MockCacheService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttls: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.ttls.lock().unwrap().get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(_, expires_at)| *expires_at > Instant::now())
            .unwrap_or(false)
    }

    /// Put a raw value, bypassing the services
    pub fn insert_raw(&self, key: &str, value: &str, ttl: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
    }
}

#[async_trait]
impl CacheServiceTrait for MockCacheService {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.should_fail {
            return Err("Cache unavailable".to_string());
        }
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((value, expires_at)) if *expires_at > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String> {
        if self.should_fail {
            return Err("Cache unavailable".to_string());
        }
        self.insert_raw(key, value, ttl);
        self.ttls.lock().unwrap().insert(key.to_string(), ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("Cache unavailable".to_string());
        }
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
