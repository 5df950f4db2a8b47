use crate::{
    abstract_trait::KeyQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllKeys, errors::RepositoryError, model::ProductKey,
};
use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use tracing::{error, info};

const KEY_COLUMNS: &str = "key_id, product_id, key_value, is_assigned, assigned_order_id, \
                           revoked_at, created_at, updated_at";

#[derive(Clone)]
pub struct KeyQueryRepository {
    db: ConnectionPool,
}

impl KeyQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn row_to_key(row: &PgRow) -> Result<ProductKey, sqlx::Error> {
    Ok(ProductKey {
        key_id: row.try_get("key_id")?,
        product_id: row.try_get("product_id")?,
        key_value: row.try_get("key_value")?,
        is_assigned: row.try_get("is_assigned")?,
        assigned_order_id: row.try_get("assigned_order_id")?,
        revoked_at: row.try_get("revoked_at")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl KeyQueryRepositoryTrait for KeyQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllKeys,
    ) -> Result<(Vec<ProductKey>, i64), RepositoryError> {
        info!(
            "🔍 Fetching keys (product: {:?}, assigned: {:?}, search: {:?})",
            req.product_id, req.assigned, req.search
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = (((req.page - 1).max(0)) * req.page_size) as i64;

        let search_pattern = {
            let trimmed = req.search.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        let rows = sqlx::query(&format!(
            r#"
            SELECT {KEY_COLUMNS}, COUNT(*) OVER() AS total_count
            FROM product_keys
            WHERE ($1::INT IS NULL OR product_id = $1)
              AND ($2::BOOLEAN IS NULL OR is_assigned = $2)
              AND ($3::TEXT IS NULL OR key_value ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        ))
        .bind(req.product_id)
        .bind(req.assigned)
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch keys: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows
            .first()
            .map(|r| r.try_get::<i64, _>("total_count").unwrap_or(0))
            .unwrap_or(0);

        let keys = rows
            .iter()
            .map(row_to_key)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok((keys, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductKey>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let key = sqlx::query_as::<_, ProductKey>(&format!(
            r#"
            SELECT {KEY_COLUMNS}
            FROM product_keys
            WHERE key_id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(key)
    }

    async fn find_by_order(&self, order_id: i32) -> Result<Vec<ProductKey>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let keys = sqlx::query_as::<_, ProductKey>(&format!(
            r#"
            SELECT {KEY_COLUMNS}
            FROM product_keys
            WHERE assigned_order_id = $1 AND revoked_at IS NULL
            ORDER BY key_id
            "#,
        ))
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch keys for order {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        Ok(keys)
    }
}
