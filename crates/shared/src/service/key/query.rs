use crate::{
    abstract_trait::{DynKeyQueryRepository, KeyQueryServiceTrait},
    domain::requests::FindAllKeys,
    domain::responses::{ApiResponsePagination, KeyResponse, Pagination},
    errors::ServiceError,
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct KeyQueryService {
    query: DynKeyQueryRepository,
}

impl KeyQueryService {
    pub fn new(query: DynKeyQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl KeyQueryServiceTrait for KeyQueryService {
    async fn find_all(
        &self,
        req: &FindAllKeys,
    ) -> Result<ApiResponsePagination<Vec<KeyResponse>>, ServiceError> {
        let (keys, total) = self.query.find_all(req).await?;

        let data: Vec<KeyResponse> = keys.into_iter().map(KeyResponse::from).collect();

        Ok(ApiResponsePagination::success(
            "Keys retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }
}
