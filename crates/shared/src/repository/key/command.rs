use crate::{
    abstract_trait::KeyCommandRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::ProductKey,
};
use async_trait::async_trait;
use tracing::{error, info};

const KEY_COLUMNS: &str = "key_id, product_id, key_value, is_assigned, assigned_order_id, \
                           revoked_at, created_at, updated_at";

#[derive(Clone)]
pub struct KeyCommandRepository {
    db: ConnectionPool,
}

impl KeyCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn map_insert_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23505")
    {
        return RepositoryError::AlreadyExists("Key value already exists".to_string());
    }
    RepositoryError::from(err)
}

#[async_trait]
impl KeyCommandRepositoryTrait for KeyCommandRepository {
    async fn insert_keys(
        &self,
        product_id: i32,
        values: &[String],
    ) -> Result<Vec<ProductKey>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let mut inserted = Vec::with_capacity(values.len());

        for value in values {
            let key = sqlx::query_as::<_, ProductKey>(&format!(
                r#"
                INSERT INTO product_keys (product_id, key_value, created_at, updated_at)
                VALUES ($1, $2, current_timestamp, current_timestamp)
                RETURNING {KEY_COLUMNS}
                "#,
            ))
            .bind(product_id)
            .bind(value)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to insert key for product {}: {:?}",
                    product_id, e
                );
                map_insert_error(e)
            })?;

            inserted.push(key);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Added {} keys to product ID {}",
            inserted.len(),
            product_id
        );
        Ok(inserted)
    }

    async fn assign_to_order(
        &self,
        order_id: i32,
        product_id: i32,
        count: i32,
    ) -> Result<Vec<ProductKey>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // SKIP LOCKED keeps concurrent confirmations from claiming the same
        // rows; the claim and the flag flip commit atomically.
        let assigned = sqlx::query_as::<_, ProductKey>(&format!(
            r#"
            UPDATE product_keys
            SET is_assigned = TRUE,
                assigned_order_id = $1,
                updated_at = current_timestamp
            WHERE key_id IN (
                SELECT key_id
                FROM product_keys
                WHERE product_id = $2
                  AND is_assigned = FALSE
                  AND revoked_at IS NULL
                ORDER BY key_id
                LIMIT $3
                FOR UPDATE SKIP LOCKED
            )
            RETURNING {KEY_COLUMNS}
            "#,
        ))
        .bind(order_id)
        .bind(product_id)
        .bind(count as i64)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to assign keys to order {}: {:?}",
                order_id, e
            );
            RepositoryError::from(e)
        })?;

        if (assigned.len() as i32) < count {
            // Roll the partial claim back; the pool is too small.
            tx.rollback().await.map_err(RepositoryError::from)?;
            return Err(RepositoryError::Conflict(format!(
                "Product {} has only {} unassigned keys, {} requested",
                product_id,
                assigned.len(),
                count
            )));
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "🔑 Assigned {} keys to order ID {}",
            assigned.len(),
            order_id
        );
        Ok(assigned)
    }

    async fn revoke_key(&self, key_id: i32) -> Result<ProductKey, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let key = sqlx::query_as::<_, ProductKey>(&format!(
            r#"
            UPDATE product_keys
            SET revoked_at = current_timestamp,
                is_assigned = FALSE,
                assigned_order_id = NULL,
                updated_at = current_timestamp
            WHERE key_id = $1 AND revoked_at IS NULL
            RETURNING {KEY_COLUMNS}
            "#,
        ))
        .bind(key_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to revoke key {}: {:?}", key_id, e);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🚫 Revoked key ID {}", key.key_id);
        Ok(key)
    }
}
