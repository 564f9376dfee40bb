//! In-memory [`Collection`] used to exercise the list pipeline without a
//! database.
//!
//! Ordering mirrors PostgreSQL defaults: `NULL` sorts after every value in
//! ascending order and before every value in descending order.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::query::ListQuery;
use crate::result::AppResult;
use crate::traits::Collection;
use crate::types::filter::{FilterCondition, FilterValue};
use crate::types::sorting::{SortDirection, SortField};

/// The value of one column of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Nullable integer.
    Integer(Option<i64>),
    /// Nullable text.
    Text(Option<String>),
    /// Boolean.
    Boolean(bool),
    /// Timestamp.
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    fn is_null(&self) -> bool {
        matches!(self, Self::Integer(None) | Self::Text(None))
    }

    fn equals(&self, expected: &FilterValue) -> bool {
        match (self, expected) {
            (Self::Integer(Some(a)), FilterValue::Integer(b)) => a == b,
            (Self::Boolean(a), FilterValue::Boolean(b)) => a == b,
            (Self::Text(Some(a)), FilterValue::Text(b)) => a == b,
            _ => false,
        }
    }

    fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        match self {
            Self::Text(Some(text)) => text.to_lowercase().contains(needle_lower),
            _ => false,
        }
    }

    fn ascending_cmp(&self, other: &Self) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// A record whose columns can be read by column key.
pub trait Record<C>: Clone + Send + Sync {
    /// Current value of `column`.
    fn field(&self, column: C) -> FieldValue;
}

/// A `Vec`-backed collection. Insertion order is the storage order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection<T> {
    items: Vec<T>,
}

impl<T> MemoryCollection<T> {
    /// Create a collection over `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of stored records, ignoring filters.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> MemoryCollection<T> {
    fn matching<'a, C>(&'a self, filters: &'a [FilterCondition<C>]) -> impl Iterator<Item = &'a T>
    where
        C: Copy,
        T: Record<C>,
    {
        self.items
            .iter()
            .filter(move |item| filters.iter().all(|f| matches_filter(*item, f)))
    }
}

fn matches_filter<C: Copy, T: Record<C>>(item: &T, filter: &FilterCondition<C>) -> bool {
    match filter {
        FilterCondition::Eq { column, value } => item.field(*column).equals(value),
        FilterCondition::Contains { columns, needle } => {
            let needle = needle.to_lowercase();
            columns
                .iter()
                .any(|c| item.field(*c).contains_ignore_case(&needle))
        }
    }
}

fn compare<C: Copy, T: Record<C>>(a: &T, b: &T, order: &[SortField<C>]) -> Ordering {
    for term in order {
        let ord = a.field(term.column).ascending_cmp(&b.field(term.column));
        let ord = match term.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

#[async_trait]
impl<C, T> Collection<C> for MemoryCollection<T>
where
    C: Copy + Send + Sync + 'static,
    T: Record<C> + 'static,
{
    type Item = T;

    async fn count(&self, filters: &[FilterCondition<C>]) -> AppResult<i64> {
        Ok(self.matching(filters).count() as i64)
    }

    async fn fetch(&self, query: &ListQuery<C>) -> AppResult<Vec<T>> {
        let mut rows: Vec<&T> = self.matching(&query.filters).collect();
        rows.sort_by(|a, b| compare(*a, *b, &query.order));

        Ok(rows
            .into_iter()
            .skip(query.offset.max(0) as usize)
            .take(query.limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_sort_last_ascending() {
        let null = FieldValue::Text(None);
        let value = FieldValue::Text(Some("a".into()));
        assert_eq!(null.ascending_cmp(&value), Ordering::Greater);
        assert_eq!(value.ascending_cmp(&null), Ordering::Less);
        assert_eq!(null.ascending_cmp(&FieldValue::Text(None)), Ordering::Equal);
    }

    #[test]
    fn test_null_never_equals_or_contains() {
        assert!(!FieldValue::Integer(None).equals(&FilterValue::Integer(1)));
        assert!(!FieldValue::Text(None).contains_ignore_case("a"));
    }

    #[test]
    fn test_contains_ignores_case() {
        let value = FieldValue::Text(Some("Alice Smith".into()));
        assert!(value.contains_ignore_case("smi"));
        assert!(value.contains_ignore_case(&"ALICE".to_lowercase()));
        assert!(!value.contains_ignore_case("bob"));
    }

    #[test]
    fn test_mismatched_types_do_not_match() {
        assert!(!FieldValue::Boolean(true).equals(&FilterValue::Integer(1)));
        assert!(!FieldValue::Integer(Some(1)).equals(&FilterValue::Text("1".into())));
    }
}
