//! Generic list-query pipeline.
//!
//! Every list endpoint runs the same steps: resolve the requested ordering
//! against the record kind's allow-list, count the filtered set, fetch one
//! ordered slice, and attach pagination metadata.

pub mod memory;
pub mod order;

use tracing::debug;

use crate::result::AppResult;
use crate::traits::Collection;
use crate::types::filter::FilterCondition;
use crate::types::pagination::{PageRequest, PageResponse};
use crate::types::sorting::SortField;

pub use order::{SortPolicy, build_order, parse_sort};

/// A fully resolved query handed to a [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<C> {
    /// Conditions combined with AND.
    pub filters: Vec<FilterCondition<C>>,
    /// Ordering terms, already ending in the stable tiebreaker.
    pub order: Vec<SortField<C>>,
    /// Rows to skip.
    pub offset: i64,
    /// Maximum rows to return.
    pub limit: i64,
}

/// Produce one page of `collection`.
///
/// The sort string is resolved first, so an invalid field is reported without
/// touching the collection. `total` counts matches before pagination.
pub async fn list_page<C, S>(
    collection: &S,
    filters: Vec<FilterCondition<C>>,
    sort: Option<&str>,
    policy: &SortPolicy<C>,
    page: PageRequest,
) -> AppResult<PageResponse<S::Item>>
where
    C: Copy + Send + Sync + 'static,
    S: Collection<C> + ?Sized,
{
    let order = policy.resolve(sort)?;
    debug!(
        order = ?order.iter().map(|f| (f.name, f.direction.as_sql())).collect::<Vec<_>>(),
        filters = filters.len(),
        page = page.page,
        page_size = page.page_size,
        "Resolved list query"
    );

    let total = collection.count(&filters).await?;

    let query = ListQuery {
        filters,
        order,
        offset: page.offset(),
        limit: page.limit(),
    };

    let items = if query.offset < total && query.limit > 0 {
        collection.fetch(&query).await?
    } else {
        Vec::new()
    };

    Ok(PageResponse::new(items, &page, total))
}
