use crate::{
    abstract_trait::{DynEmailService, DynHashing, DynJwtService, DynRefreshTokenRepository,
        DynResetTokenRepository, DynSessionStore, DynUserQueryRepository},
    cache::CacheStore,
    config::ConnectionPool,
    repository::{
        KeyRepository, OrderRepository, ProductRepository, RefreshTokenRepository,
        ResetTokenRepository, UserRepository,
    },
    service::{AuthService, AuthServiceDeps, KeyService, OrderService, OrderServiceDeps,
        ProductService},
};
use anyhow::Result;
use deadpool_redis::Pool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: AuthService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    pub key_service: KeyService,
    pub user_query: DynUserQueryRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .field("key_service", &"<KeyService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub email: DynEmailService,
    pub sessions: DynSessionStore,
    pub redis_pool: Pool,
    pub app_base_url: String,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            email,
            sessions,
            redis_pool,
            app_base_url,
        } = deps;

        let user_repository = UserRepository::new(pool.clone());
        let product_repository = ProductRepository::new(pool.clone());
        let order_repository = OrderRepository::new(pool.clone());
        let key_repository = KeyRepository::new(pool.clone());
        let refresh_tokens: DynRefreshTokenRepository =
            Arc::new(RefreshTokenRepository::new(pool.clone()));
        let reset_tokens: DynResetTokenRepository =
            Arc::new(ResetTokenRepository::new(pool.clone()));

        let cache = Arc::new(CacheStore::new(redis_pool));

        let auth_service = AuthService::new(AuthServiceDeps {
            hash,
            jwt: jwt_config,
            user_query: user_repository.query.clone(),
            user_command: user_repository.command.clone(),
            refresh_tokens,
            reset_tokens,
            sessions,
            email,
            app_base_url,
        });

        let product_service = ProductService::new(
            product_repository.query.clone(),
            product_repository.command.clone(),
            cache.clone(),
        );

        let order_service = OrderService::new(OrderServiceDeps {
            order_query: order_repository.query.clone(),
            order_command: order_repository.command.clone(),
            product_query: product_repository.query.clone(),
            key_query: key_repository.query.clone(),
            key_command: key_repository.command.clone(),
        });

        let key_service = KeyService::new(
            key_repository.query.clone(),
            key_repository.command.clone(),
            product_repository.query.clone(),
        );

        Ok(Self {
            auth_service,
            product_service,
            order_service,
            key_service,
            user_query: user_repository.query,
        })
    }
}
