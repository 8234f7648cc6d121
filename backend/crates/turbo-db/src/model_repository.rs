use crate::Result as DbErrorResult;

use async_trait::async_trait;

/// Persistence for one model type
#[async_trait]
pub trait ModelRepository<M>: Send + Sync {
    /// Insert a new record and assign its primary key
    async fn insert(&self, model: &mut M) -> DbErrorResult<()>;

    async fn update(&self, model: &M) -> DbErrorResult<()>;

    async fn delete(&self, model: &M) -> DbErrorResult<()>;

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<M>>;
}
