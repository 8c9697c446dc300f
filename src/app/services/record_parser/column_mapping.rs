//! Logical field to column index mapping
//!
//! This module owns the static alias table and resolves each logical record
//! field to a column of the current file, or records it as absent.

use super::header::HeaderRow;
use crate::constants::header_aliases;
use crate::{Error, Result};
use std::str::FromStr;

/// Logical fields of a vehicle record that can be sourced from a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    Vin,
    County,
    City,
    State,
    PostalCode,
    ModelYear,
    Make,
    Model,
    EvType,
    ElectricRange,
    BaseMsrp,
    LegislativeDistrict,
    DolVehicleId,
    VehicleLocation,
    ElectricUtility,
    CensusTract,
}

impl RecordField {
    /// Number of logical fields
    pub const COUNT: usize = 17;

    /// Every field, in record declaration order
    pub const ALL: [RecordField; Self::COUNT] = [
        RecordField::Id,
        RecordField::Vin,
        RecordField::County,
        RecordField::City,
        RecordField::State,
        RecordField::PostalCode,
        RecordField::ModelYear,
        RecordField::Make,
        RecordField::Model,
        RecordField::EvType,
        RecordField::ElectricRange,
        RecordField::BaseMsrp,
        RecordField::LegislativeDistrict,
        RecordField::DolVehicleId,
        RecordField::VehicleLocation,
        RecordField::ElectricUtility,
        RecordField::CensusTract,
    ];

    /// Accepted normalized header aliases, in priority order
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            RecordField::Id => header_aliases::ID,
            RecordField::Vin => header_aliases::VIN,
            RecordField::County => header_aliases::COUNTY,
            RecordField::City => header_aliases::CITY,
            RecordField::State => header_aliases::STATE,
            RecordField::PostalCode => header_aliases::POSTAL_CODE,
            RecordField::ModelYear => header_aliases::MODEL_YEAR,
            RecordField::Make => header_aliases::MAKE,
            RecordField::Model => header_aliases::MODEL,
            RecordField::EvType => header_aliases::EV_TYPE,
            RecordField::ElectricRange => header_aliases::ELECTRIC_RANGE,
            RecordField::BaseMsrp => header_aliases::BASE_MSRP,
            RecordField::LegislativeDistrict => header_aliases::LEGISLATIVE_DISTRICT,
            RecordField::DolVehicleId => header_aliases::DOL_VEHICLE_ID,
            RecordField::VehicleLocation => header_aliases::VEHICLE_LOCATION,
            RecordField::ElectricUtility => header_aliases::ELECTRIC_UTILITY,
            RecordField::CensusTract => header_aliases::CENSUS_TRACT,
        }
    }

    /// Record field name
    pub fn name(self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::Vin => "vin",
            RecordField::County => "county",
            RecordField::City => "city",
            RecordField::State => "state",
            RecordField::PostalCode => "postal_code",
            RecordField::ModelYear => "model_year",
            RecordField::Make => "make",
            RecordField::Model => "model",
            RecordField::EvType => "ev_type",
            RecordField::ElectricRange => "electric_range",
            RecordField::BaseMsrp => "base_msrp",
            RecordField::LegislativeDistrict => "legislative_district",
            RecordField::DolVehicleId => "dol_vehicle_id",
            RecordField::VehicleLocation => "vehicle_location",
            RecordField::ElectricUtility => "electric_utility",
            RecordField::CensusTract => "census_tract",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl FromStr for RecordField {
    type Err = Error;

    /// Accepts the record field name, case-insensitive, with `-` or `_`
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        RecordField::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| {
                Error::data_validation(format!(
                    "Unknown field '{}': expected one of {}",
                    s,
                    RecordField::ALL.map(RecordField::name).join(", ")
                ))
            })
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Column mapping for one header row
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    indices: [Option<usize>; RecordField::COUNT],

    /// Number of columns declared by the header
    pub field_count: usize,
}

impl ColumnMapping {
    /// Resolve every logical field against the header
    pub fn analyze(header: &HeaderRow) -> Self {
        let mut indices = [None; RecordField::COUNT];

        for field in RecordField::ALL {
            indices[field.slot()] = header.find_index(field.aliases());
        }

        Self {
            indices,
            field_count: header.field_count(),
        }
    }

    /// Get the column index for a field, if the header declared it
    pub fn get_index(&self, field: RecordField) -> Option<usize> {
        self.indices[field.slot()]
    }

    /// Check if a field was found in the header
    pub fn has_field(&self, field: RecordField) -> bool {
        self.get_index(field).is_some()
    }

    /// Fields with no matching header column
    pub fn missing_fields(&self) -> Vec<RecordField> {
        RecordField::ALL
            .into_iter()
            .filter(|field| !self.has_field(*field))
            .collect()
    }

    /// Get statistics about the mapping: (header columns, mapped fields)
    pub fn stats(&self) -> (usize, usize) {
        let mapped = self.indices.iter().filter(|index| index.is_some()).count();
        (self.field_count, mapped)
    }
}
