use crate::errors::RepositoryError;
use crate::model::RefreshToken;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynRefreshTokenRepository = Arc<dyn RefreshTokenRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RefreshTokenRepositoryTrait {
    async fn create(
        &self,
        user_id: i32,
        token: &str,
        expiration: NaiveDateTime,
    ) -> Result<RefreshToken, RepositoryError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, RepositoryError>;
    async fn delete_by_user(&self, user_id: i32) -> Result<(), RepositoryError>;
}
