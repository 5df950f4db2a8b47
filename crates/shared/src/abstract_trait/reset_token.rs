use crate::errors::RepositoryError;
use crate::model::ResetToken;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynResetTokenRepository = Arc<dyn ResetTokenRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ResetTokenRepositoryTrait {
    async fn create(
        &self,
        user_id: i32,
        token: &str,
        expiration: NaiveDateTime,
    ) -> Result<ResetToken, RepositoryError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<ResetToken>, RepositoryError>;
    async fn delete_by_user(&self, user_id: i32) -> Result<(), RepositoryError>;
}
