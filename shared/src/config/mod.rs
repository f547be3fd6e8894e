//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Session token signing and OTP policy
//! - `cache` - Redis connection configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server binding
//! - `sms` - SMS provider selection and credentials
//! - `sweep` - Housekeeping of stale unverified accounts

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod server;
pub mod sms;
pub mod sweep;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, OtpConfig};
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;
pub use sms::SmsConfig;
pub use sweep::SweepConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration, `None` when `DATABASE_URL` is unset
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Cache configuration, `None` when `REDIS_URL` is unset
    #[serde(default)]
    pub cache: Option<CacheConfig>,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// SMS provider configuration
    pub sms: SmsConfig,

    /// Unverified account sweep configuration
    pub sweep: SweepConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: None,
            cache: None,
            auth: AuthConfig::default(),
            sms: SmsConfig::default(),
            sweep: SweepConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: std::env::var("DATABASE_URL")
                .ok()
                .map(|_| DatabaseConfig::from_env()),
            cache: std::env::var("REDIS_URL").ok().map(|_| CacheConfig::from_env()),
            auth: AuthConfig::from_env(),
            sms: SmsConfig::from_env(),
            sweep: SweepConfig::from_env(),
            logging,
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
