use crate::{
    abstract_trait::{DynKeyQueryRepository, DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::requests::FindAllOrders,
    domain::responses::{ApiResponse, ApiResponsePagination, OrderResponse, Pagination},
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderStatus},
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    key_query: DynKeyQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, key_query: DynKeyQueryRepository) -> Self {
        Self { query, key_query }
    }

    /// Paid orders carry their assigned key values; everything else ships
    /// with an empty list.
    async fn to_response(&self, order: Order) -> Result<OrderResponse, ServiceError> {
        let is_paid = order.parsed_status().ok() == Some(OrderStatus::Paid);
        let response = OrderResponse::from(order);

        if !is_paid {
            return Ok(response);
        }

        let keys = self
            .key_query
            .find_by_order(response.id)
            .await?
            .into_iter()
            .map(|k| k.key_value)
            .collect();

        Ok(response.with_keys(keys))
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all(req).await?;

        let mut data = Vec::with_capacity(orders.len());
        for order in orders {
            data.push(self.to_response(order).await?);
        }

        Ok(ApiResponsePagination::success(
            "Orders retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_for_user(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_by_user(user_id).await?;

        let mut data = Vec::with_capacity(orders.len());
        for order in orders {
            data.push(self.to_response(order).await?);
        }

        Ok(ApiResponse::success("Orders retrieved successfully", data))
    }

    async fn find_by_id(
        &self,
        order_id: i32,
        requester_id: i32,
        requester_is_admin: bool,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or(RepositoryError::NotFound)
            .map_err(ServiceError::from)?;

        if !requester_is_admin && order.user_id != requester_id {
            return Err(ServiceError::Forbidden(
                "You do not own this order".to_string(),
            ));
        }

        let data = self.to_response(order).await?;

        Ok(ApiResponse::success("Order retrieved successfully", data))
    }
}
