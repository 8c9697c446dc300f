//! Record ordering for the table view

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::app::models::VehicleRecord;
use crate::app::services::record_parser::RecordField;

/// Table columns are the logical record fields
pub type SortField = RecordField;

/// Sort direction of the active column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Active sort column and direction
///
/// Starts on model year, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort_field: RecordField::ModelYear,
            direction: SortDirection::Descending,
        }
    }
}

impl TableState {
    pub fn new(sort_field: SortField, direction: SortDirection) -> Self {
        Self {
            sort_field,
            direction,
        }
    }

    /// Column header click: flip on the active column, else switch ascending
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == self.sort_field {
            self.direction = self.direction.reversed();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Sorted copy of `records` under this state
    pub fn sort(&self, records: &[VehicleRecord]) -> Vec<VehicleRecord> {
        sort_records(records, self.sort_field, self.direction)
    }
}

/// Stable sort into a new vector; the input is left untouched
///
/// Equal keys keep their input order in both directions.
pub fn sort_records(
    records: &[VehicleRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<VehicleRecord> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare_by(field, a, b)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare_by(field, b, a)),
    }
    sorted
}

/// Compare two records on one field
///
/// Text compares case-insensitively, falling back to byte order so the
/// ordering is total. Numbers compare numerically and EV types by label.
pub fn compare_by(field: SortField, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    match field {
        RecordField::ModelYear => a.model_year.cmp(&b.model_year),
        RecordField::ElectricRange => a.electric_range.cmp(&b.electric_range),
        RecordField::BaseMsrp => a.base_msrp.total_cmp(&b.base_msrp),
        RecordField::EvType => a.ev_type.as_str().cmp(b.ev_type.as_str()),
        _ => compare_text(text_of(field, a), text_of(field, b)),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn text_of(field: SortField, record: &VehicleRecord) -> &str {
    match field {
        RecordField::Id => &record.id,
        RecordField::Vin => &record.vin,
        RecordField::County => &record.county,
        RecordField::City => &record.city,
        RecordField::State => &record.state,
        RecordField::PostalCode => &record.postal_code,
        RecordField::Make => &record.make,
        RecordField::Model => &record.model,
        RecordField::LegislativeDistrict => &record.legislative_district,
        RecordField::DolVehicleId => &record.dol_vehicle_id,
        RecordField::VehicleLocation => &record.vehicle_location,
        RecordField::ElectricUtility => &record.electric_utility,
        RecordField::CensusTract => &record.census_tract,
        RecordField::ModelYear
        | RecordField::ElectricRange
        | RecordField::BaseMsrp
        | RecordField::EvType => "",
    }
}
