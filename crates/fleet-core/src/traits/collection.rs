//! Read-side query interface consumed by the list pipeline.

use async_trait::async_trait;

use crate::query::ListQuery;
use crate::result::AppResult;
use crate::types::filter::FilterCondition;

/// A filterable, sortable set of records of one kind.
///
/// Implemented by the PostgreSQL repositories and by
/// [`MemoryCollection`](crate::query::memory::MemoryCollection). Failures are
/// returned as-is to the caller of the pipeline.
#[async_trait]
pub trait Collection<C>: Send + Sync
where
    C: Copy + Send + Sync + 'static,
{
    /// Record type produced by the collection.
    type Item: Send;

    /// Count records satisfying every condition.
    async fn count(&self, filters: &[FilterCondition<C>]) -> AppResult<i64>;

    /// Fetch one ordered, sliced page of matching records.
    async fn fetch(&self, query: &ListQuery<C>) -> AppResult<Vec<Self::Item>>;
}
