pub mod auth;

pub use auth::*;
pub use pa_shared::{ApiResponse, ErrorResponse};
