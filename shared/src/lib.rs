//! Shared utilities and common types for the PhoneAuth server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures and language selection
//! - Phone number helpers for logging

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    OtpConfig, ServerConfig, SmsConfig, SweepConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, Language};
pub use utils::phone;
