use crate::{
    abstract_trait::{DynEmailService, DynHashing, DynJwtService, DynSessionStore},
    cache::SessionStore,
    config::{Config, ConnectionPool, Hashing, JwtConfig, RedisClient},
    di::{DependenciesInject, DependenciesInjectDeps},
    service::EmailService,
};
use anyhow::{Context, Result};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub session: DynSessionStore,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &"<dyn JwtService>")
            .field("session", &"<dyn SessionStore>")
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let redis = RedisClient::new(&config.redis).context("Failed to create Redis client")?;
        redis.ping().await.context("Failed to ping Redis server")?;

        let sessions =
            Arc::new(SessionStore::new(redis.pool.clone())) as DynSessionStore;

        let email = Arc::new(
            EmailService::new(&config.email_config)
                .map_err(|e| anyhow::anyhow!("Failed to create email service: {e}"))?,
        ) as DynEmailService;

        let deps = DependenciesInjectDeps {
            pool,
            hash: hashing,
            jwt_config: jwt_config.clone(),
            email,
            sessions: sessions.clone(),
            redis_pool: redis.pool.clone(),
            app_base_url: config.app_base_url.clone(),
        };

        let di_container = DependenciesInject::new(deps)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            jwt_config,
            session: sessions,
        })
    }
}
