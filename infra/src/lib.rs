//! # Infrastructure Layer
//!
//! Concrete adapters for the ports declared in `pa_core`:
//! - **Database**: MySQL user store using SQLx
//! - **Cache**: Redis TTL cache for codes, cooldowns and the token denylist
//! - **SMS**: verification code delivery (Twilio, mock)
//! - **Repositories**: in-memory user store for local runs without MySQL
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio SMS provider (default)

// Re-export core types for convenience
pub use pa_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// SMS service module - External SMS providers
pub mod sms;

/// Cache module - Redis and in-memory TTL caches
pub mod cache;

/// In-memory repository implementations
pub mod repositories;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
