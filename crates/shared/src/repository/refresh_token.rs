use crate::{
    abstract_trait::RefreshTokenRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::RefreshToken,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::{error, info};

#[derive(Clone)]
pub struct RefreshTokenRepository {
    db: ConnectionPool,
}

impl RefreshTokenRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RefreshTokenRepositoryTrait for RefreshTokenRepository {
    async fn create(
        &self,
        user_id: i32,
        token: &str,
        expiration: NaiveDateTime,
    ) -> Result<RefreshToken, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let refresh_token = sqlx::query_as::<_, RefreshToken>(
            r#"
            INSERT INTO refresh_tokens (user_id, token, expiration, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING refresh_token_id, user_id, token, expiration, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(token)
        .bind(expiration)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to store refresh token for user {}: {:?}",
                user_id, e
            );
            RepositoryError::from(e)
        })?;

        info!("✅ Stored refresh token for user ID {}", user_id);
        Ok(refresh_token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let refresh_token = sqlx::query_as::<_, RefreshToken>(
            r#"
            SELECT refresh_token_id, user_id, token, expiration, created_at, updated_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(refresh_token)
    }

    async fn delete_by_user(&self, user_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            DELETE FROM refresh_tokens WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to delete refresh tokens for user {}: {:?}",
                user_id, e
            );
            RepositoryError::from(e)
        })?;

        Ok(())
    }
}
