//! Periodic removal of accounts that never completed phone verification
//!
//! A registration only reaches the user store once its code is verified, but
//! accounts created through other paths can still be left unverified. Once
//! the grace period has passed no live code can exist for them, so they are
//! safe to delete.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info, warn};

use pa_shared::config::SweepConfig;

use crate::errors::DomainResult;
use crate::repositories::UserRepository;

/// Configuration for the unverified account sweep
#[derive(Debug, Clone)]
pub struct SweepServiceConfig {
    /// Whether the background task is started
    pub enabled: bool,
    /// Time between runs
    pub interval: Duration,
    /// Minimum account age before deletion
    pub grace: chrono::Duration,
}

impl Default for SweepServiceConfig {
    fn default() -> Self {
        Self::from(&SweepConfig::default())
    }
}

impl From<&SweepConfig> for SweepServiceConfig {
    fn from(config: &SweepConfig) -> Self {
        Self {
            enabled: config.enabled,
            interval: Duration::from_secs(config.interval_seconds),
            grace: chrono::Duration::seconds(config.grace_seconds),
        }
    }
}

/// Deletes stale unverified users on a fixed interval
pub struct UnverifiedUserSweep<U: UserRepository + 'static> {
    user_repository: Arc<U>,
    config: SweepServiceConfig,
}

impl<U: UserRepository> UnverifiedUserSweep<U> {
    pub fn new(user_repository: Arc<U>, config: SweepServiceConfig) -> Self {
        Self {
            user_repository,
            config,
        }
    }

    /// Run a single sweep and return the number of deleted accounts
    pub async fn run_once(&self) -> DomainResult<u64> {
        let cutoff = Utc::now() - self.config.grace;
        let deleted = self.user_repository.delete_unverified_before(cutoff).await?;

        info!(deleted, cutoff = %cutoff, event = "sweep_completed", "Unverified account sweep completed");
        Ok(deleted)
    }

    /// Spawn the sweep loop on the tokio runtime
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Unverified account sweep is disabled");
            return;
        }

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval.as_secs(),
                "Unverified account sweep started"
            );

            let mut interval_timer = tokio::time::interval(self.config.interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_once().await {
                    error!("Unverified account sweep failed: {}", e);
                }
            }
        });
    }
}
