use crate::domain::requests::{AddProductKeysRequest, FindAllKeys};
use crate::domain::responses::{ApiResponse, ApiResponsePagination, KeyResponse};
use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynKeyQueryService = Arc<dyn KeyQueryServiceTrait + Send + Sync>;
pub type DynKeyCommandService = Arc<dyn KeyCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait KeyQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllKeys,
    ) -> Result<ApiResponsePagination<Vec<KeyResponse>>, ServiceError>;
}

#[async_trait]
pub trait KeyCommandServiceTrait {
    async fn add_keys(
        &self,
        product_id: i32,
        req: &AddProductKeysRequest,
    ) -> Result<ApiResponse<Vec<KeyResponse>>, ServiceError>;
    async fn revoke_key(&self, key_id: i32) -> Result<ApiResponse<KeyResponse>, ServiceError>;
}
