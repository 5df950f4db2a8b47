mod command;
mod query;

use crate::abstract_trait::{DynKeyCommandRepository, DynKeyQueryRepository};
use crate::config::ConnectionPool;
use std::sync::Arc;

use self::command::KeyCommandRepository;
use self::query::KeyQueryRepository;

#[derive(Clone)]
pub struct KeyRepository {
    pub query: DynKeyQueryRepository,
    pub command: DynKeyCommandRepository,
}

impl KeyRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(KeyQueryRepository::new(pool.clone())) as DynKeyQueryRepository;
        let command = Arc::new(KeyCommandRepository::new(pool.clone())) as DynKeyCommandRepository;

        Self { query, command }
    }
}
