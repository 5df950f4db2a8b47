use crate::{
    abstract_trait::{
        DynJwtService, DynRefreshTokenRepository, DynUserQueryRepository, IdentityServiceTrait,
    },
    domain::responses::{ApiResponse, TokenResponse, UserResponse},
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

const REFRESH_TOKEN_DAYS: i64 = 7;

#[derive(Clone)]
pub struct IdentityService {
    jwt: DynJwtService,
    user_query: DynUserQueryRepository,
    refresh_tokens: DynRefreshTokenRepository,
}

impl IdentityService {
    pub fn new(
        jwt: DynJwtService,
        user_query: DynUserQueryRepository,
        refresh_tokens: DynRefreshTokenRepository,
    ) -> Self {
        Self {
            jwt,
            user_query,
            refresh_tokens,
        }
    }
}

#[async_trait]
impl IdentityServiceTrait for IdentityService {
    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await?
            .ok_or(RepositoryError::NotFound)
            .map_err(ServiceError::from)?;

        Ok(ApiResponse::success(
            "User retrieved successfully",
            UserResponse::from(user),
        ))
    }

    async fn refresh_token(&self, token: &str) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user_id = self.jwt.verify_token(token, "refresh")? as i32;

        let stored = self
            .refresh_tokens
            .find_by_token(token)
            .await?
            .ok_or(ServiceError::InvalidTokenType)?;

        if stored.expiration < Utc::now().naive_utc() {
            return Err(ServiceError::TokenExpired);
        }

        // Rotate: the presented token dies with this exchange.
        self.refresh_tokens.delete_by_user(user_id).await?;

        let access_token = self.jwt.generate_token(user_id as i64, "access")?;
        let refresh_token = self.jwt.generate_token(user_id as i64, "refresh")?;

        self.refresh_tokens
            .create(
                user_id,
                &refresh_token,
                (Utc::now() + Duration::days(REFRESH_TOKEN_DAYS)).naive_utc(),
            )
            .await?;

        info!("♻️ Rotated refresh token for user ID {}", user_id);

        Ok(ApiResponse::success(
            "Token refreshed successfully",
            TokenResponse {
                access_token,
                refresh_token,
            },
        ))
    }
}
