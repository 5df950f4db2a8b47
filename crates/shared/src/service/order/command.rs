use crate::{
    abstract_trait::{
        DynKeyCommandRepository, DynKeyQueryRepository, DynOrderCommandRepository,
        DynOrderQueryRepository, DynProductQueryRepository, OrderCommandServiceTrait,
    },
    domain::requests::{AssignKeysRequest, CreateOrderRequest, SubmitPaymentRequest},
    domain::responses::{ApiResponse, OrderResponse},
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderStatus},
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct OrderCommandServiceDeps {
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub product_query: DynProductQueryRepository,
    pub key_query: DynKeyQueryRepository,
    pub key_command: DynKeyCommandRepository,
}

#[derive(Clone)]
pub struct OrderCommandService {
    order_query: DynOrderQueryRepository,
    order_command: DynOrderCommandRepository,
    product_query: DynProductQueryRepository,
    key_query: DynKeyQueryRepository,
    key_command: DynKeyCommandRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            order_query,
            order_command,
            product_query,
            key_query,
            key_command,
        } = deps;

        Self {
            order_query,
            order_command,
            product_query,
            key_query,
            key_command,
        }
    }

    async fn fetch_order(&self, order_id: i32) -> Result<Order, ServiceError> {
        self.order_query
            .find_by_id(order_id)
            .await?
            .ok_or(RepositoryError::NotFound)
            .map_err(ServiceError::from)
    }

    async fn response_with_keys(&self, order: Order) -> Result<OrderResponse, ServiceError> {
        let keys = self
            .key_query
            .find_by_order(order.order_id)
            .await?
            .into_iter()
            .map(|k| k.key_value)
            .collect();

        Ok(OrderResponse::from(order).with_keys(keys))
    }

    /// Best-effort key hand-out for a freshly paid order. A short pool is
    /// not an error here: the order stays paid and the admin tops it up
    /// through assign-keys.
    async fn auto_assign_keys(&self, order: &Order) {
        let wanted = order.quantity - self.assigned_count(order.order_id).await;
        if wanted <= 0 {
            return;
        }

        match self
            .key_command
            .assign_to_order(order.order_id, order.product_id, wanted)
            .await
        {
            Ok(keys) => info!(
                "🔑 Auto-assigned {} keys to order {}",
                keys.len(),
                order.order_id
            ),
            Err(RepositoryError::Conflict(msg)) => {
                warn!(
                    "⚠️ Order {} paid but key pool is short: {}",
                    order.order_id, msg
                );
            }
            Err(e) => {
                warn!(
                    "⚠️ Failed to auto-assign keys to order {}: {:?}",
                    order.order_id, e
                );
            }
        }
    }

    async fn assigned_count(&self, order_id: i32) -> i32 {
        match self.key_query.find_by_order(order_id).await {
            Ok(keys) => keys.len() as i32,
            Err(_) => 0,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let product = self
            .product_query
            .find_by_id(req.product_id)
            .await?
            .ok_or(RepositoryError::NotFound)
            .map_err(ServiceError::from)?;

        let order = self
            .order_command
            .create_order(user_id, &product, req.quantity)
            .await?;

        Ok(ApiResponse::success(
            "Order placed successfully",
            OrderResponse::from(order),
        ))
    }

    async fn submit_payment(
        &self,
        order_id: i32,
        user_id: i32,
        req: &SubmitPaymentRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.fetch_order(order_id).await?;

        if order.user_id != user_id {
            return Err(ServiceError::Forbidden(
                "You do not own this order".to_string(),
            ));
        }

        let updated = self.order_command.submit_payment(order_id, req).await?;

        Ok(ApiResponse::success(
            "Payment submitted, awaiting confirmation",
            OrderResponse::from(updated),
        ))
    }

    async fn confirm_payment(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .order_command
            .transition_status(
                order_id,
                &[OrderStatus::AwaitingConfirmation],
                OrderStatus::Paid,
            )
            .await?;

        self.auto_assign_keys(&order).await;

        let data = self.response_with_keys(order).await?;

        Ok(ApiResponse::success("Payment confirmed", data))
    }

    async fn mark_paid(&self, order_id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .order_command
            .transition_status(
                order_id,
                &[OrderStatus::Pending, OrderStatus::AwaitingConfirmation],
                OrderStatus::Paid,
            )
            .await?;

        let data = self.response_with_keys(order).await?;

        Ok(ApiResponse::success("Order marked as paid", data))
    }

    async fn assign_keys(
        &self,
        order_id: i32,
        req: &AssignKeysRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.fetch_order(order_id).await?;

        // Glossary rule: keys only ever attach to a paid order.
        if order.parsed_status().ok() != Some(OrderStatus::Paid) {
            return Err(ServiceError::Repo(RepositoryError::Conflict(format!(
                "Order {} is {}, keys can only be assigned to a paid order",
                order_id, order.status
            ))));
        }

        self.key_command
            .assign_to_order(order_id, order.product_id, req.count)
            .await?;

        let data = self.response_with_keys(order).await?;

        Ok(ApiResponse::success("Keys assigned successfully", data))
    }
}
