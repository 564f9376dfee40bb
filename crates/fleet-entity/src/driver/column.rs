//! Queryable columns of the `drivers` table.

use fleet_core::query::SortPolicy;
use fleet_core::query::memory::{FieldValue, Record};
use fleet_core::traits::SqlColumn;
use fleet_core::types::AllowList;

use super::model::Driver;

/// Column keys of [`Driver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverColumn {
    DriverId,
    DriverName,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

impl SqlColumn for DriverColumn {
    fn as_sql(&self) -> &'static str {
        match self {
            Self::DriverId => "driver_id",
            Self::DriverName => "driver_name",
            Self::IsActive => "is_active",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Fields accepted by `GET /drivers?sort=`.
pub static DRIVER_SORT_FIELDS: AllowList<DriverColumn> = AllowList::new(&[
    ("driver_id", DriverColumn::DriverId),
    ("driver_name", DriverColumn::DriverName),
    ("is_active", DriverColumn::IsActive),
    ("created_at", DriverColumn::CreatedAt),
    ("updated_at", DriverColumn::UpdatedAt),
]);

/// Most recently updated first, ties broken by `driver_id`.
pub static DRIVER_SORT: SortPolicy<DriverColumn> = SortPolicy {
    allow_list: &DRIVER_SORT_FIELDS,
    default_sort: &["-updated_at", "driver_id"],
    stable_key: "driver_id",
};

/// Columns matched by the `search` parameter.
pub const DRIVER_SEARCH_COLUMNS: &[DriverColumn] = &[DriverColumn::DriverName];

impl Record<DriverColumn> for Driver {
    fn field(&self, column: DriverColumn) -> FieldValue {
        match column {
            DriverColumn::DriverId => FieldValue::Integer(Some(self.driver_id)),
            DriverColumn::DriverName => FieldValue::Text(Some(self.driver_name.clone())),
            DriverColumn::IsActive => FieldValue::Boolean(self.is_active),
            DriverColumn::CreatedAt => FieldValue::Timestamp(self.created_at),
            DriverColumn::UpdatedAt => FieldValue::Timestamp(self.updated_at),
        }
    }
}
