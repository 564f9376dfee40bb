//! Queryable columns of the `trucks` table.

use fleet_core::query::SortPolicy;
use fleet_core::query::memory::{FieldValue, Record};
use fleet_core::traits::SqlColumn;
use fleet_core::types::AllowList;

use super::model::Truck;

/// Column keys of [`Truck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruckColumn {
    TruckId,
    UnitNumber,
    Vin,
    PlateNumber,
    DriverId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

impl SqlColumn for TruckColumn {
    fn as_sql(&self) -> &'static str {
        match self {
            Self::TruckId => "truck_id",
            Self::UnitNumber => "unit_number",
            Self::Vin => "vin",
            Self::PlateNumber => "plate_number",
            Self::DriverId => "driver_id",
            Self::IsActive => "is_active",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Fields accepted by `GET /trucks?sort=`.
pub static TRUCK_SORT_FIELDS: AllowList<TruckColumn> = AllowList::new(&[
    ("truck_id", TruckColumn::TruckId),
    ("unit_number", TruckColumn::UnitNumber),
    ("vin", TruckColumn::Vin),
    ("plate_number", TruckColumn::PlateNumber),
    ("driver_id", TruckColumn::DriverId),
    ("is_active", TruckColumn::IsActive),
    ("created_at", TruckColumn::CreatedAt),
    ("updated_at", TruckColumn::UpdatedAt),
]);

/// Most recently updated first, ties broken by `truck_id`.
pub static TRUCK_SORT: SortPolicy<TruckColumn> = SortPolicy {
    allow_list: &TRUCK_SORT_FIELDS,
    default_sort: &["-updated_at", "truck_id"],
    stable_key: "truck_id",
};

/// Columns matched by the `search` parameter.
pub const TRUCK_SEARCH_COLUMNS: &[TruckColumn] = &[
    TruckColumn::UnitNumber,
    TruckColumn::Vin,
    TruckColumn::PlateNumber,
];

impl Record<TruckColumn> for Truck {
    fn field(&self, column: TruckColumn) -> FieldValue {
        match column {
            TruckColumn::TruckId => FieldValue::Integer(Some(self.truck_id)),
            TruckColumn::UnitNumber => FieldValue::Text(Some(self.unit_number.clone())),
            TruckColumn::Vin => FieldValue::Text(self.vin.clone()),
            TruckColumn::PlateNumber => FieldValue::Text(self.plate_number.clone()),
            TruckColumn::DriverId => FieldValue::Integer(self.driver_id),
            TruckColumn::IsActive => FieldValue::Boolean(self.is_active),
            TruckColumn::CreatedAt => FieldValue::Timestamp(self.created_at),
            TruckColumn::UpdatedAt => FieldValue::Timestamp(self.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_names_match_sql_columns() {
        for name in TRUCK_SORT_FIELDS.sorted_names() {
            let (_, column) = TRUCK_SORT_FIELDS.resolve(name).unwrap();
            assert_eq!(column.as_sql(), name);
        }
    }

    #[test]
    fn test_invalid_sort_lists_every_truck_field() {
        let err = TRUCK_SORT.resolve(Some("driver_name")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid sort field 'driver_name'. Allowed: [\"created_at\", \"driver_id\", \
             \"is_active\", \"plate_number\", \"truck_id\", \"unit_number\", \"updated_at\", \"vin\"]"
        );
    }
}
