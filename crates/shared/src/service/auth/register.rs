use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, RegisterServiceTrait,
    },
    domain::requests::RegisterRequest,
    domain::responses::{ApiResponse, UserResponse},
    errors::{RepositoryError, ServiceError},
    model::ROLE_CUSTOMER,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct RegisterService {
    hash: DynHashing,
    user_query: DynUserQueryRepository,
    user_command: DynUserCommandRepository,
}

impl RegisterService {
    pub fn new(
        hash: DynHashing,
        user_query: DynUserQueryRepository,
        user_command: DynUserCommandRepository,
    ) -> Self {
        Self {
            hash,
            user_query,
            user_command,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        if self.user_query.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                "Email {} is already registered",
                req.email
            ))));
        }

        let password_hash = self.hash.hash_password(&req.password).await?;

        let user = self
            .user_command
            .create_user(&req.name, &req.email, &password_hash, ROLE_CUSTOMER)
            .await?;

        info!("🎉 Registered new customer {}", user.email);

        Ok(ApiResponse::success(
            "Registration successful",
            UserResponse::from(user),
        ))
    }
}
