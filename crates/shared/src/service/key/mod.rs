mod command;
mod query;

use crate::abstract_trait::{
    DynKeyCommandRepository, DynKeyCommandService, DynKeyQueryRepository, DynKeyQueryService,
    DynProductQueryRepository,
};
use std::sync::Arc;

use self::command::KeyCommandService;
use self::query::KeyQueryService;

#[derive(Clone)]
pub struct KeyService {
    pub query: DynKeyQueryService,
    pub command: DynKeyCommandService,
}

impl KeyService {
    pub fn new(
        query_repository: DynKeyQueryRepository,
        command_repository: DynKeyCommandRepository,
        product_query: DynProductQueryRepository,
    ) -> Self {
        let query = Arc::new(KeyQueryService::new(query_repository)) as DynKeyQueryService;
        let command = Arc::new(KeyCommandService::new(command_repository, product_query))
            as DynKeyCommandService;

        Self { query, command }
    }
}
