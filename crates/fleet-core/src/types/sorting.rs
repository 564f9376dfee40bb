//! Sorting types for list endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One resolved ordering term: a public field name, the column it maps to,
/// and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortField<C> {
    /// Public field name as accepted in the `sort` parameter.
    pub name: &'static str,
    /// Resolved column.
    pub column: C,
    /// Sort direction.
    pub direction: SortDirection,
}

impl<C> SortField<C> {
    /// Create an ascending term.
    pub fn asc(name: &'static str, column: C) -> Self {
        Self {
            name,
            column,
            direction: SortDirection::Asc,
        }
    }

    /// Create a descending term.
    pub fn desc(name: &'static str, column: C) -> Self {
        Self {
            name,
            column,
            direction: SortDirection::Desc,
        }
    }
}

/// Fixed table of sortable field names for one record kind.
///
/// Tables are declared as `static` items next to the entity so that the
/// mapping is built once rather than resolved per request.
#[derive(Debug)]
pub struct AllowList<C: 'static> {
    entries: &'static [(&'static str, C)],
}

impl<C: Copy> AllowList<C> {
    /// Wrap a static `(name, column)` table.
    pub const fn new(entries: &'static [(&'static str, C)]) -> Self {
        Self { entries }
    }

    /// Look up a field name, returning the canonical name and its column.
    pub fn resolve(&self, name: &str) -> Option<(&'static str, C)> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .copied()
    }

    /// Whether `name` is sortable.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// All allowed field names in lexicographic order.
    pub fn sorted_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }
}

/// Errors raised while interpreting a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A token named a field outside the allow-list.
    #[error("Invalid sort field '{field}'. Allowed: {allowed:?}")]
    InvalidSortField {
        /// The rejected field name (without the `-` prefix).
        field: String,
        /// Every accepted field name, sorted.
        allowed: Vec<String>,
    },
}

impl From<SortError> for AppError {
    fn from(err: SortError) -> Self {
        let details = match &err {
            SortError::InvalidSortField { field, allowed } => serde_json::json!({
                "field": field,
                "allowed": allowed,
            }),
        };
        AppError::validation(err.to_string()).with_details(details)
    }
}
