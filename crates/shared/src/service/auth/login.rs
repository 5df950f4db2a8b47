use crate::{
    abstract_trait::{
        DynHashing, DynJwtService, DynRefreshTokenRepository, DynSessionStore,
        DynUserQueryRepository, LoginServiceTrait,
    },
    domain::requests::LoginRequest,
    domain::responses::{ApiResponse, LoginResponse, Session, UserResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

const SESSION_TTL_MINUTES: i64 = 30;
const REFRESH_TOKEN_DAYS: i64 = 7;

pub struct LoginServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub user_query: DynUserQueryRepository,
    pub refresh_tokens: DynRefreshTokenRepository,
    pub sessions: DynSessionStore,
}

#[derive(Clone)]
pub struct LoginService {
    hash: DynHashing,
    jwt: DynJwtService,
    user_query: DynUserQueryRepository,
    refresh_tokens: DynRefreshTokenRepository,
    sessions: DynSessionStore,
}

impl LoginService {
    pub fn new(deps: LoginServiceDeps) -> Self {
        let LoginServiceDeps {
            hash,
            jwt,
            user_query,
            refresh_tokens,
            sessions,
        } = deps;

        Self {
            hash,
            jwt,
            user_query,
            refresh_tokens,
            sessions,
        }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        let user = self
            .user_query
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hash
            .compare_password(&user.password, &req.password)
            .await?;

        let access_token = self.jwt.generate_token(user.user_id as i64, "access")?;
        let refresh_token = self.jwt.generate_token(user.user_id as i64, "refresh")?;

        // One live refresh token per user.
        self.refresh_tokens.delete_by_user(user.user_id).await?;
        self.refresh_tokens
            .create(
                user.user_id,
                &refresh_token,
                (Utc::now() + Duration::days(REFRESH_TOKEN_DAYS)).naive_utc(),
            )
            .await?;

        let session = Session {
            user_id: user.user_id.to_string(),
            email: user.email.clone(),
            roles: vec![user.role.clone()],
        };

        self.sessions
            .create_session(
                &format!("session:{}", user.user_id),
                &session,
                Duration::minutes(SESSION_TTL_MINUTES),
            )
            .await;

        info!("🔓 User {} logged in", user.email);

        Ok(ApiResponse::success(
            "Login successful",
            LoginResponse {
                access_token,
                refresh_token,
                user: UserResponse::from(user),
            },
        ))
    }
}
