use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    cache::CacheStore,
    domain::requests::FindAllProducts,
    domain::responses::{
        ApiResponse, ApiResponsePagination, Pagination, ProductResponse, ProductResponseDeleteAt,
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;
use tracing::info;

const LIST_CACHE_TTL_MINUTES: i64 = 5;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    cache: Arc<CacheStore>,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, cache: Arc<CacheStore>) -> Self {
        Self { query, cache }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_active(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let cache_key = format!(
            "products:active:{}:{}:{}",
            req.page, req.page_size, req.search
        );

        if let Some(cached) = self
            .cache
            .get_from_cache::<ApiResponsePagination<Vec<ProductResponse>>>(&cache_key)
            .await
        {
            info!("📦 Serving products from cache: {cache_key}");
            return Ok(cached);
        }

        let (products, total) = self.query.find_active(req).await?;

        let data: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();

        let response = ApiResponsePagination::success(
            "Products retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        );

        self.cache
            .set_to_cache(
                &cache_key,
                &response,
                Duration::minutes(LIST_CACHE_TTL_MINUTES),
            )
            .await;

        Ok(response)
    }

    async fn find_trashed(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponseDeleteAt>>, ServiceError> {
        let (products, total) = self.query.find_trashed(req).await?;

        let data: Vec<ProductResponseDeleteAt> = products
            .into_iter()
            .map(ProductResponseDeleteAt::from)
            .collect();

        Ok(ApiResponsePagination::success(
            "Trashed products retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let cache_key = format!("product:{id}");

        if let Some(cached) = self
            .cache
            .get_from_cache::<ApiResponse<ProductResponse>>(&cache_key)
            .await
        {
            info!("📦 Serving product {id} from cache");
            return Ok(cached);
        }

        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)
            .map_err(ServiceError::from)?;

        let response = ApiResponse::success(
            "Product retrieved successfully",
            ProductResponse::from(product),
        );

        self.cache
            .set_to_cache(
                &cache_key,
                &response,
                Duration::minutes(LIST_CACHE_TTL_MINUTES),
            )
            .await;

        Ok(response)
    }
}
