use crate::{
    abstract_trait::ResetTokenRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::ResetToken,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::{error, info};

#[derive(Clone)]
pub struct ResetTokenRepository {
    db: ConnectionPool,
}

impl ResetTokenRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResetTokenRepositoryTrait for ResetTokenRepository {
    async fn create(
        &self,
        user_id: i32,
        token: &str,
        expiration: NaiveDateTime,
    ) -> Result<ResetToken, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reset_token = sqlx::query_as::<_, ResetToken>(
            r#"
            INSERT INTO reset_tokens (user_id, token, expiration, created_at)
            VALUES ($1, $2, $3, current_timestamp)
            RETURNING reset_token_id, user_id, token, expiration, created_at
            "#,
        )
        .bind(user_id)
        .bind(token)
        .bind(expiration)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to store reset token for user {}: {:?}",
                user_id, e
            );
            RepositoryError::from(e)
        })?;

        info!("✅ Stored reset token for user ID {}", user_id);
        Ok(reset_token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<ResetToken>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let reset_token = sqlx::query_as::<_, ResetToken>(
            r#"
            SELECT reset_token_id, user_id, token, expiration, created_at
            FROM reset_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(reset_token)
    }

    async fn delete_by_user(&self, user_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            DELETE FROM reset_tokens WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to delete reset tokens for user {}: {:?}",
                user_id, e
            );
            RepositoryError::from(e)
        })?;

        Ok(())
    }
}
