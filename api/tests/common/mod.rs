use std::sync::Arc;

use actix_web::web;

use pa_api::routes::auth::AppState;
use pa_core::services::{
    AccessGuard, AuthService, AuthServiceConfig, Authorizer, HealthCheck, OtpServiceConfig,
    SessionConfig, TokenService,
};
use pa_infra::cache::InMemoryTtlCache;
use pa_infra::repositories::InMemoryUserRepository;
use pa_infra::sms::{MockSmsService, SmsServiceAdapter};

pub type TestState = AppState<InMemoryUserRepository, SmsServiceAdapter, InMemoryTtlCache>;

pub const LOCAL_PHONE: &str = "901234567";
pub const CANONICAL_PHONE: &str = "+998901234567";

/// Services over in-memory stores, with a handle on the outgoing SMS
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub authorizer: Arc<dyn Authorizer>,
    pub sms: MockSmsService,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_health_checks(Vec::new())
    }

    pub fn with_health_checks(health_checks: Vec<Arc<dyn HealthCheck>>) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let cache = Arc::new(InMemoryTtlCache::new());
        let sms = MockSmsService::with_options(false, false);
        let token_service = Arc::new(TokenService::new(SessionConfig::default()));

        let auth_service = Arc::new(AuthService::new(
            users.clone(),
            Arc::new(SmsServiceAdapter::new(Arc::new(sms.clone()))),
            cache.clone(),
            token_service.clone(),
            OtpServiceConfig::default(),
            AuthServiceConfig {
                bcrypt_cost: 4,
                ..Default::default()
            },
        ));

        Self {
            state: web::Data::new(AppState::new(auth_service).with_health_checks(health_checks)),
            authorizer: Arc::new(AccessGuard::new(cache, token_service)),
            sms,
            users,
        }
    }

    pub fn last_code(&self) -> String {
        self.sms
            .last_code_for(CANONICAL_PHONE)
            .expect("no code was sent")
    }
}

pub fn register_body() -> serde_json::Value {
    serde_json::json!({
        "phone": LOCAL_PHONE,
        "firstName": "Ali",
        "lastName": "Valiyev",
        "password": "secret123",
    })
}
