use crate::domain::requests::FindAllKeys;
use crate::errors::RepositoryError;
use crate::model::ProductKey;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynKeyQueryRepository = Arc<dyn KeyQueryRepositoryTrait + Send + Sync>;
pub type DynKeyCommandRepository = Arc<dyn KeyCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait KeyQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllKeys)
    -> Result<(Vec<ProductKey>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductKey>, RepositoryError>;
    async fn find_by_order(&self, order_id: i32) -> Result<Vec<ProductKey>, RepositoryError>;
}

#[async_trait]
pub trait KeyCommandRepositoryTrait {
    async fn insert_keys(
        &self,
        product_id: i32,
        values: &[String],
    ) -> Result<Vec<ProductKey>, RepositoryError>;

    /// Claims up to `count` unassigned, unrevoked keys of the product and
    /// binds them to the order in one transaction. Locks the claimed rows
    /// with `FOR UPDATE SKIP LOCKED` so concurrent confirmations never hand
    /// out the same key. Returns `Conflict` when fewer than `count` keys
    /// are available.
    async fn assign_to_order(
        &self,
        order_id: i32,
        product_id: i32,
        count: i32,
    ) -> Result<Vec<ProductKey>, RepositoryError>;

    /// Stamps `revoked_at` and detaches the key from its order. Revoked
    /// keys never return to the assignable pool.
    async fn revoke_key(&self, key_id: i32) -> Result<ProductKey, RepositoryError>;
}
