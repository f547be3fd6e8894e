use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pa_api::app::create_app;
use pa_api::config;
use pa_api::routes::auth::AppState;
use pa_core::repositories::UserRepository;
use pa_core::services::{
    AccessGuard, AuthService, AuthServiceConfig, Authorizer, CacheServiceTrait, HealthCheck,
    OtpServiceConfig, SessionConfig, SweepServiceConfig, TokenService, UnverifiedUserSweep,
};
use pa_infra::cache::{InMemoryTtlCache, RedisTtlCache};
use pa_infra::database::{DatabasePool, MySqlUserRepository};
use pa_infra::repositories::InMemoryUserRepository;
use pa_infra::sms::{create_sms_service, SmsServiceAdapter};
use pa_shared::{AppConfig, LoggingConfig};

const MEMORY_CACHE_PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    config::check(&config)?;

    info!(environment = %config.environment, "Starting PhoneAuth API server");

    let database = match &config.database {
        Some(db_config) => {
            let pool = DatabasePool::new(db_config)
                .await
                .context("connecting to MySQL")?;
            pool.run_migrations().await.context("running migrations")?;
            Some(Arc::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory user store");
            None
        }
    };

    let cache = match &config.cache {
        Some(cache_config) => Some(Arc::new(
            RedisTtlCache::connect(cache_config.clone())
                .await
                .context("connecting to Redis")?,
        )),
        None => {
            tracing::warn!("REDIS_URL not set, using in-memory TTL cache");
            None
        }
    };

    let mut health_checks: Vec<Arc<dyn HealthCheck>> = Vec::new();
    if let Some(pool) = &database {
        health_checks.push(pool.clone());
    }
    if let Some(cache) = &cache {
        health_checks.push(cache.clone());
    }

    let result = match (database.clone(), cache) {
        (Some(pool), Some(cache)) => {
            let users = MySqlUserRepository::new(pool.get_pool().clone());
            serve(config, Arc::new(users), cache, health_checks).await
        }
        (Some(pool), None) => {
            let users = MySqlUserRepository::new(pool.get_pool().clone());
            serve(config, Arc::new(users), in_memory_cache(), health_checks).await
        }
        (None, Some(cache)) => {
            serve(config, Arc::new(InMemoryUserRepository::new()), cache, health_checks).await
        }
        (None, None) => {
            serve(
                config,
                Arc::new(InMemoryUserRepository::new()),
                in_memory_cache(),
                health_checks,
            )
            .await
        }
    };

    if let Some(pool) = database {
        pool.close().await;
    }
    result
}

/// Process-local cache with its expired entries purged in the background
fn in_memory_cache() -> Arc<InMemoryTtlCache> {
    let cache = InMemoryTtlCache::new();
    cache.start_purge_task(MEMORY_CACHE_PURGE_INTERVAL);
    Arc::new(cache)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Build the services over the selected stores and run the HTTP server
async fn serve<U, C>(
    config: AppConfig,
    user_repository: Arc<U>,
    cache: Arc<C>,
    health_checks: Vec<Arc<dyn HealthCheck>>,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    C: CacheServiceTrait + 'static,
{
    let token_service = Arc::new(TokenService::new(SessionConfig::from(&config.auth.jwt)));

    let sms_provider =
        create_sms_service(&config.sms, config.environment).context("configuring SMS provider")?;
    let sms_service = Arc::new(SmsServiceAdapter::new(sms_provider));
    info!(provider = sms_service.provider_name(), "SMS provider ready");

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        sms_service,
        cache.clone(),
        token_service.clone(),
        OtpServiceConfig::from(&config.auth.otp),
        AuthServiceConfig::from(&config.auth.otp),
    ));
    let authorizer: Arc<dyn Authorizer> = Arc::new(AccessGuard::new(cache, token_service));

    Arc::new(UnverifiedUserSweep::new(
        user_repository,
        SweepServiceConfig::from(&config.sweep),
    ))
    .start_background_task();

    let app_state = web::Data::new(AppState::new(auth_service).with_health_checks(health_checks));
    let environment = config.environment;
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), authorizer.clone(), environment)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("binding {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
