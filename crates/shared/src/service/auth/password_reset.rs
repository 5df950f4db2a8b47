use crate::{
    abstract_trait::{
        DynEmailService, DynHashing, DynRefreshTokenRepository, DynResetTokenRepository,
        DynUserCommandRepository, DynUserQueryRepository, PasswordResetServiceTrait,
    },
    domain::requests::{EmailRequest, ForgotPasswordRequest, ResetPasswordRequest},
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{EmailTemplateData, generate_random_string},
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{info, warn};

const RESET_TOKEN_LENGTH: usize = 64;
const RESET_TOKEN_MINUTES: i64 = 30;

pub struct PasswordResetServiceDeps {
    pub hash: DynHashing,
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub reset_tokens: DynResetTokenRepository,
    pub refresh_tokens: DynRefreshTokenRepository,
    pub email: DynEmailService,
    pub app_base_url: String,
}

#[derive(Clone)]
pub struct PasswordResetService {
    hash: DynHashing,
    user_query: DynUserQueryRepository,
    user_command: DynUserCommandRepository,
    reset_tokens: DynResetTokenRepository,
    refresh_tokens: DynRefreshTokenRepository,
    email: DynEmailService,
    app_base_url: String,
}

impl PasswordResetService {
    pub fn new(deps: PasswordResetServiceDeps) -> Self {
        let PasswordResetServiceDeps {
            hash,
            user_query,
            user_command,
            reset_tokens,
            refresh_tokens,
            email,
            app_base_url,
        } = deps;

        Self {
            hash,
            user_query,
            user_command,
            reset_tokens,
            refresh_tokens,
            email,
            app_base_url,
        }
    }

    fn invalid_token() -> ServiceError {
        ServiceError::Validation(vec!["Invalid or expired reset token".to_string()])
    }
}

#[async_trait]
impl PasswordResetServiceTrait for PasswordResetService {
    async fn forgot_password(
        &self,
        req: &ForgotPasswordRequest,
    ) -> Result<ApiResponse<bool>, ServiceError> {
        // Responds identically whether or not the account exists.
        let Some(user) = self.user_query.find_by_email(&req.email).await? else {
            warn!("Password reset requested for unknown email");
            return Ok(ApiResponse::success(
                "If the email exists, a reset link has been sent",
                true,
            ));
        };

        self.reset_tokens.delete_by_user(user.user_id).await?;

        let token = generate_random_string(RESET_TOKEN_LENGTH)
            .map_err(|e| ServiceError::Internal(format!("Token generation failed: {e}")))?;

        self.reset_tokens
            .create(
                user.user_id,
                &token,
                (Utc::now() + Duration::minutes(RESET_TOKEN_MINUTES)).naive_utc(),
            )
            .await?;

        let link = format!("{}/reset-password?token={}", self.app_base_url, token);

        self.email
            .send(&EmailRequest {
                to: user.email.clone(),
                subject: "Reset your password".to_string(),
                data: EmailTemplateData {
                    title: "Password reset".to_string(),
                    message: format!(
                        "Hi {}, we received a request to reset your password. \
                         The link below is valid for {} minutes.",
                        user.name, RESET_TOKEN_MINUTES
                    ),
                    button: "Reset password".to_string(),
                    link,
                },
            })
            .await?;

        info!("📧 Sent password reset email to user ID {}", user.user_id);

        Ok(ApiResponse::success(
            "If the email exists, a reset link has been sent",
            true,
        ))
    }

    async fn reset_password(
        &self,
        req: &ResetPasswordRequest,
    ) -> Result<ApiResponse<bool>, ServiceError> {
        let stored = self
            .reset_tokens
            .find_by_token(&req.token)
            .await?
            .ok_or_else(Self::invalid_token)?;

        if stored.expiration < Utc::now().naive_utc() {
            return Err(Self::invalid_token());
        }

        let password_hash = self.hash.hash_password(&req.new_password).await?;

        self.user_command
            .update_password(stored.user_id, &password_hash)
            .await?;

        // Burn the reset token and every open refresh token.
        self.reset_tokens.delete_by_user(stored.user_id).await?;
        self.refresh_tokens.delete_by_user(stored.user_id).await?;

        info!("🔐 Password reset for user ID {}", stored.user_id);

        Ok(ApiResponse::success("Password reset successful", true))
    }
}
