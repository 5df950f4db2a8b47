use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    cache::CacheStore,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    domain::responses::{ApiResponse, ProductResponse, ProductResponseDeleteAt},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    cache: Arc<CacheStore>,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, cache: Arc<CacheStore>) -> Self {
        Self { command, cache }
    }

    async fn invalidate(&self, id: i32) {
        self.cache.delete_from_cache(&format!("product:{id}")).await;
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.command.create_product(req).await?;

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let mut req = req.clone();
        req.id = Some(id);

        let product = self.command.update_product(&req).await?;
        self.invalidate(id).await;

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(product),
        ))
    }

    async fn trash_product(
        &self,
        id: i32,
    ) -> Result<ApiResponse<ProductResponseDeleteAt>, ServiceError> {
        let product = self.command.trash_product(id).await?;
        self.invalidate(id).await;

        info!("🗑️ Product {} trashed", id);

        Ok(ApiResponse::success(
            "Product moved to trash",
            ProductResponseDeleteAt::from(product),
        ))
    }

    async fn restore_product(
        &self,
        id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self.command.restore_product(id).await?;
        self.invalidate(id).await;

        Ok(ApiResponse::success(
            "Product restored successfully",
            ProductResponse::from(product),
        ))
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        self.command.delete_product(id).await?;
        self.invalidate(id).await;

        Ok(ApiResponse::success(
            "Product permanently deleted",
            true,
        ))
    }
}
