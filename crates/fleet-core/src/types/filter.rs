//! Filter types for dynamic query building.

use serde::{Deserialize, Serialize};

/// A dynamic filter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// An integer value.
    Integer(i64),
    /// A boolean value.
    Boolean(bool),
    /// A string value.
    Text(String),
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single filter condition over columns of type `C`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCondition<C> {
    /// Column equals the value exactly.
    Eq {
        /// Column to compare.
        column: C,
        /// Expected value.
        value: FilterValue,
    },
    /// At least one of the columns contains `needle`, ignoring case.
    Contains {
        /// Text columns searched (OR-ed together).
        columns: Vec<C>,
        /// Trimmed, non-empty search text.
        needle: String,
    },
}

impl<C: Copy> FilterCondition<C> {
    /// Shorthand for an equality filter.
    pub fn eq(column: C, value: impl Into<FilterValue>) -> Self {
        Self::Eq {
            column,
            value: value.into(),
        }
    }

    /// Build a free-text search over `columns`.
    ///
    /// Returns `None` when the text is absent or only whitespace: such a
    /// search does not restrict the result set.
    pub fn search(columns: &[C], text: Option<&str>) -> Option<Self> {
        let needle = text.map(str::trim).filter(|t| !t.is_empty())?;
        if columns.is_empty() {
            return None;
        }
        Some(Self::Contains {
            columns: columns.to_vec(),
            needle: needle.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_trims_text() {
        let filter = FilterCondition::search(&[1_u8, 2], Some("  kw  ")).expect("filter");
        assert_eq!(
            filter,
            FilterCondition::Contains {
                columns: vec![1, 2],
                needle: "kw".into()
            }
        );
    }

    #[test]
    fn test_blank_search_is_no_filter() {
        assert_eq!(FilterCondition::<u8>::search(&[1], None), None);
        assert_eq!(FilterCondition::<u8>::search(&[1], Some("")), None);
        assert_eq!(FilterCondition::<u8>::search(&[1], Some(" \t ")), None);
    }

    #[test]
    fn test_eq_conversions() {
        assert_eq!(
            FilterCondition::eq(0_u8, true),
            FilterCondition::Eq {
                column: 0,
                value: FilterValue::Boolean(true)
            }
        );
        assert_eq!(
            FilterCondition::eq(0_u8, 7_i64),
            FilterCondition::Eq {
                column: 0,
                value: FilterValue::Integer(7)
            }
        );
    }
}
