//! Unverified account sweep configuration

use serde::{Deserialize, Serialize};

/// Schedule for deleting accounts that never completed verification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepConfig {
    /// Whether the background task runs at all
    pub enabled: bool,

    /// Interval between runs in seconds
    pub interval_seconds: u64,

    /// Minimum age of an unverified account before it is deleted, in seconds
    pub grace_seconds: i64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: 86_400, // daily
            grace_seconds: 120,
        }
    }
}

impl SweepConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: std::env::var("SWEEP_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.enabled),
            interval_seconds: std::env::var("SWEEP_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval_seconds),
            grace_seconds: std::env::var("SWEEP_GRACE_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.grace_seconds),
        }
    }
}
