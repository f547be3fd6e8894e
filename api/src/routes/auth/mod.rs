//! Authentication route handlers
//!
//! - Registration and OTP delivery
//! - OTP verification
//! - Password login
//! - Profile read and update
//! - Logout

pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod send_otp;
pub mod update;
pub mod verify_otp;

use std::sync::Arc;

use pa_core::repositories::UserRepository;
use pa_core::services::{AuthService, CacheServiceTrait, HealthCheck, SmsServiceTrait};

/// Application state that holds shared services
pub struct AppState<U, S, C>
where
    U: UserRepository,
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    pub auth_service: Arc<AuthService<U, S, C>>,
    /// Backing services checked by `/health`
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl<U, S, C> AppState<U, S, C>
where
    U: UserRepository,
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    pub fn new(auth_service: Arc<AuthService<U, S, C>>) -> Self {
        Self {
            auth_service,
            health_checks: Vec::new(),
        }
    }

    pub fn with_health_checks(mut self, health_checks: Vec<Arc<dyn HealthCheck>>) -> Self {
        self.health_checks = health_checks;
        self
    }
}
