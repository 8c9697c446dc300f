//! Individual row parsing for registration files
//!
//! This module turns one split data row into a [`VehicleRecord`], applying
//! the documented defaults for absent columns and the id fallback chain.

use super::column_mapping::{ColumnMapping, RecordField};
use super::field_parsers::{get_field, parse_f64, parse_string, parse_u32};
use crate::Result;
use crate::app::models::{EvType, VehicleRecord};
use crate::constants::SYNTHETIC_ID_PREFIX;

/// Parse a single vehicle record from split row fields
///
/// `line_index` is the row's position in the input's line list and is used
/// for the synthetic id and for diagnostics.
pub fn parse_vehicle_record(
    fields: &[String],
    mapping: &ColumnMapping,
    line_index: usize,
) -> Result<VehicleRecord> {
    let vin = parse_string(fields, mapping, RecordField::Vin, line_index)?;
    let raw_id = parse_string(fields, mapping, RecordField::Id, line_index)?;
    let id = resolve_id(&raw_id, &vin, line_index);

    let ev_type = get_field(fields, mapping, RecordField::EvType, line_index)?
        .map(EvType::from_raw)
        .unwrap_or_default();

    Ok(VehicleRecord {
        id,
        vin,
        county: parse_string(fields, mapping, RecordField::County, line_index)?,
        city: parse_string(fields, mapping, RecordField::City, line_index)?,
        state: parse_string(fields, mapping, RecordField::State, line_index)?,
        postal_code: parse_string(fields, mapping, RecordField::PostalCode, line_index)?,
        model_year: parse_u32(fields, mapping, RecordField::ModelYear, line_index)?,
        make: parse_string(fields, mapping, RecordField::Make, line_index)?,
        model: parse_string(fields, mapping, RecordField::Model, line_index)?,
        ev_type,
        electric_range: parse_u32(fields, mapping, RecordField::ElectricRange, line_index)?,
        base_msrp: parse_f64(fields, mapping, RecordField::BaseMsrp, line_index)?,
        legislative_district: parse_string(
            fields,
            mapping,
            RecordField::LegislativeDistrict,
            line_index,
        )?,
        dol_vehicle_id: parse_string(fields, mapping, RecordField::DolVehicleId, line_index)?,
        vehicle_location: parse_string(
            fields,
            mapping,
            RecordField::VehicleLocation,
            line_index,
        )?,
        electric_utility: parse_string(
            fields,
            mapping,
            RecordField::ElectricUtility,
            line_index,
        )?,
        census_tract: parse_string(fields, mapping, RecordField::CensusTract, line_index)?,
    })
}

/// Pick the record id: explicit id, then VIN, then `record_<line index>`
pub fn resolve_id(raw_id: &str, vin: &str, line_index: usize) -> String {
    if !raw_id.is_empty() {
        raw_id.to_string()
    } else if !vin.is_empty() {
        vin.to_string()
    } else {
        format!("{}{}", SYNTHETIC_ID_PREFIX, line_index)
    }
}
