use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::SubmitPaymentRequest,
    errors::RepositoryError,
    model::{Order, OrderStatus, Product},
};
use async_trait::async_trait;
use sqlx::Row;
use tracing::{error, info};

const ORDER_COLUMNS: &str = "order_id, user_id, product_id, product_name, price, quantity, \
                             status, payment_method, payment_trx_id, payment_sender, \
                             created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn current_status(&self, order_id: i32) -> Result<Option<String>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query(
            r#"
            SELECT status FROM orders WHERE order_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row.map(|r| r.get::<String, _>("status")))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        user_id: i32,
        product: &Product,
        quantity: i32,
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Stock reservation and order insert commit together or not at all.
        let reserved = sqlx::query(
            r#"
            UPDATE products
            SET stock = stock - $2,
                updated_at = current_timestamp
            WHERE product_id = $1 AND deleted_at IS NULL AND stock >= $2
            "#,
        )
        .bind(product.product_id)
        .bind(quantity)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to reserve stock for product {}: {:?}",
                product.product_id, e
            );
            RepositoryError::from(e)
        })?;

        if reserved.rows_affected() == 0 {
            return Err(RepositoryError::Conflict(format!(
                "Product {} does not have {} units in stock",
                product.product_id, quantity
            )));
        }

        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders
                (user_id, product_id, product_name, price, quantity, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp, current_timestamp)
            RETURNING {ORDER_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(product.product_id)
        .bind(&product.name)
        .bind(product.price * quantity as i64)
        .bind(quantity)
        .bind(OrderStatus::Pending.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} for user {} ({} x{})",
            order.order_id, user_id, order.product_name, quantity
        );
        Ok(order)
    }

    async fn submit_payment(
        &self,
        order_id: i32,
        req: &SubmitPaymentRequest,
    ) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let updated = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET payment_method = $2,
                payment_trx_id = $3,
                payment_sender = $4,
                status = $5,
                updated_at = current_timestamp
            WHERE order_id = $1 AND deleted_at IS NULL AND status = $6
            RETURNING {ORDER_COLUMNS}
            "#,
        ))
        .bind(order_id)
        .bind(&req.method)
        .bind(&req.trx_id)
        .bind(&req.sender)
        .bind(OrderStatus::AwaitingConfirmation.as_str())
        .bind(OrderStatus::Pending.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to record payment for order {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        match updated {
            Some(order) => {
                info!(
                    "💳 Recorded {} payment for order ID {}",
                    order.payment_method.as_deref().unwrap_or("?"),
                    order.order_id
                );
                Ok(order)
            }
            None => match self.current_status(order_id).await? {
                Some(status) => Err(RepositoryError::Conflict(format!(
                    "Order {order_id} is {status}, payment can only be submitted while pending"
                ))),
                None => Err(RepositoryError::NotFound),
            },
        }
    }

    async fn transition_status(
        &self,
        order_id: i32,
        allowed_from: &[OrderStatus],
        to: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let allowed: Vec<String> = allowed_from.iter().map(|s| s.to_string()).collect();

        let updated = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET status = $2,
                updated_at = current_timestamp
            WHERE order_id = $1 AND deleted_at IS NULL AND status = ANY($3)
            RETURNING {ORDER_COLUMNS}
            "#,
        ))
        .bind(order_id)
        .bind(to.as_str())
        .bind(&allowed)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to transition order {} to {}: {:?}",
                order_id, to, e
            );
            RepositoryError::from(e)
        })?;

        match updated {
            Some(order) => {
                info!("🔄 Order ID {} moved to {}", order.order_id, to);
                Ok(order)
            }
            None => match self.current_status(order_id).await? {
                Some(status) => Err(RepositoryError::Conflict(format!(
                    "Order {order_id} is {status}, cannot move to {to}"
                ))),
                None => Err(RepositoryError::NotFound),
            },
        }
    }
}
