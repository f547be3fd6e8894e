//! Type definitions module
//!
//! - `language` - Language selection for localized messages
//! - `response` - API success response wrapper

pub mod language;
pub mod response;

pub use language::Language;
pub use response::ApiResponse;
