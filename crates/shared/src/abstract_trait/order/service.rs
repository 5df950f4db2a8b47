use crate::domain::requests::{
    AssignKeysRequest, CreateOrderRequest, FindAllOrders, SubmitPaymentRequest,
};
use crate::domain::responses::{ApiResponse, ApiResponsePagination, OrderResponse};
use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_for_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        order_id: i32,
        requester_id: i32,
        requester_is_admin: bool,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn submit_payment(
        &self,
        order_id: i32,
        user_id: i32,
        req: &SubmitPaymentRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn confirm_payment(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn mark_paid(&self, order_id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn assign_keys(
        &self,
        order_id: i32,
        req: &AssignKeysRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
