use crate::domain::requests::{FindAllOrders, SubmitPaymentRequest};
use crate::errors::RepositoryError;
use crate::model::{Order, OrderStatus, Product};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order and reserves stock in one transaction; fails with
    /// `Conflict` when the product does not have `quantity` units left.
    async fn create_order(
        &self,
        user_id: i32,
        product: &Product,
        quantity: i32,
    ) -> Result<Order, RepositoryError>;

    /// Records manual payment details, guarded on the current status so a
    /// concurrent transition cannot be overwritten.
    async fn submit_payment(
        &self,
        order_id: i32,
        req: &SubmitPaymentRequest,
    ) -> Result<Order, RepositoryError>;

    /// Moves the order to `to` only if its row status is still one of
    /// `allowed_from`; returns `Conflict` otherwise.
    async fn transition_status(
        &self,
        order_id: i32,
        allowed_from: &[OrderStatus],
        to: OrderStatus,
    ) -> Result<Order, RepositoryError>;
}
