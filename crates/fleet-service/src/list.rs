//! Parameters shared by the list operations.

use serde::{Deserialize, Serialize};

use fleet_core::types::{FilterCondition, PageRequest};
use fleet_core::traits::SqlColumn;

/// Validated list parameters common to drivers and trucks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    /// Requested page.
    pub page: PageRequest,
    /// Free-text search; blank means no search.
    pub search: Option<String>,
    /// Restrict to active or inactive records.
    pub is_active: Option<bool>,
    /// Comma-separated sort tokens.
    pub sort: Option<String>,
}

impl ListParams {
    /// Filters for the `is_active` flag and the text search.
    pub(crate) fn filters<C: SqlColumn>(
        &self,
        active_column: C,
        search_columns: &[C],
    ) -> Vec<FilterCondition<C>> {
        let mut filters = Vec::new();
        if let Some(active) = self.is_active {
            filters.push(FilterCondition::eq(active_column, active));
        }
        filters.extend(FilterCondition::search(search_columns, self.search.as_deref()));
        filters
    }
}
