//! Startup configuration checks for the API binary

use anyhow::{bail, Result};

use pa_shared::AppConfig;

/// Reject unsafe configuration combinations
///
/// Production refuses the built-in signing secret and the mock SMS provider,
/// which reports every send as delivered. Missing MySQL or Redis
/// URLs fall back to in-memory stores, which only hold within one process.
pub fn check(config: &AppConfig) -> Result<()> {
    if config.auth.jwt.is_using_default_secret() {
        if config.is_production() {
            bail!("JWT_SECRET must be set in production");
        }
        tracing::warn!("Using the default JWT secret, set JWT_SECRET outside development");
    }

    if config.is_production() && config.sms.provider == "mock" {
        bail!("SMS_PROVIDER must name a real provider in production");
    }

    if config.is_production() && (config.database.is_none() || config.cache.is_none()) {
        tracing::warn!(
            database = config.database.is_some(),
            cache = config.cache.is_some(),
            "Running production with in-memory stores, state is not shared between instances"
        );
    }

    Ok(())
}
