mod command;
mod query;

use crate::abstract_trait::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService,
};
use crate::cache::CacheStore;
use std::sync::Arc;

use self::command::ProductCommandService;
use self::query::ProductQueryService;

#[derive(Clone)]
pub struct ProductService {
    pub query: DynProductQueryService,
    pub command: DynProductCommandService,
}

impl ProductService {
    pub fn new(
        query_repository: DynProductQueryRepository,
        command_repository: DynProductCommandRepository,
        cache: Arc<CacheStore>,
    ) -> Self {
        let query = Arc::new(ProductQueryService::new(query_repository, cache.clone()))
            as DynProductQueryService;
        let command = Arc::new(ProductCommandService::new(command_repository, cache))
            as DynProductCommandService;

        Self { query, command }
    }
}
