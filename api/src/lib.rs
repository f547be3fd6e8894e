//! HTTP API for phone number registration, OTP verification and sessions
//!
//! The binary in `main.rs` selects storage backends from the environment and
//! serves [`app::create_app`]; integration tests build the same application
//! over in-memory stores.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
