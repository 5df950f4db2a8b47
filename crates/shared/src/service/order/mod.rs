mod command;
mod query;

#[cfg(test)]
mod order_service_test;

use crate::abstract_trait::{
    DynKeyCommandRepository, DynKeyQueryRepository, DynOrderCommandRepository,
    DynOrderCommandService, DynOrderQueryRepository, DynOrderQueryService,
    DynProductQueryRepository,
};
use std::sync::Arc;

pub use self::command::OrderCommandServiceDeps;
use self::command::OrderCommandService;
use self::query::OrderQueryService;

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

pub struct OrderServiceDeps {
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub product_query: DynProductQueryRepository,
    pub key_query: DynKeyQueryRepository,
    pub key_command: DynKeyCommandRepository,
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            order_query,
            order_command,
            product_query,
            key_query,
            key_command,
        } = deps;

        let query = Arc::new(OrderQueryService::new(
            order_query.clone(),
            key_query.clone(),
        )) as DynOrderQueryService;

        let command = Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
            order_query,
            order_command,
            product_query,
            key_query,
            key_command,
        })) as DynOrderCommandService;

        Self { query, command }
    }
}
