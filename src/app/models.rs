//! Data models for EV registration analytics
//!
//! This module contains the core data structures for representing a single
//! registered electric vehicle and its drivetrain classification.

use crate::constants::PHEV_MARKER;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// EV Type Classification
// =============================================================================

/// Drivetrain classification of a registered vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvType {
    /// Battery electric vehicle (no combustion engine)
    #[default]
    #[serde(rename = "BEV")]
    Bev,

    /// Plug-in hybrid electric vehicle
    #[serde(rename = "PHEV")]
    Phev,
}

impl EvType {
    /// Classify a raw EV type cell
    ///
    /// Only a literal `PHEV` substring (case-insensitive) marks a plug-in
    /// hybrid. Anything else, including descriptive text such as
    /// `"Plug-in Hybrid"` or an empty cell, is a battery electric vehicle.
    pub fn from_raw(raw: &str) -> Self {
        if raw.to_uppercase().contains(PHEV_MARKER) {
            EvType::Phev
        } else {
            EvType::Bev
        }
    }

    /// Short label used for filtering and display
    pub fn as_str(self) -> &'static str {
        match self {
            EvType::Bev => "BEV",
            EvType::Phev => "PHEV",
        }
    }

    /// Human-readable description for filter menus
    pub fn description(self) -> &'static str {
        match self {
            EvType::Bev => "Battery Electric (BEV)",
            EvType::Phev => "Plug-in Hybrid (PHEV)",
        }
    }

    /// Get all EV type values in menu order
    pub fn all_values() -> [EvType; 2] {
        [EvType::Bev, EvType::Phev]
    }
}

impl FromStr for EvType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "BEV" => Ok(EvType::Bev),
            "PHEV" => Ok(EvType::Phev),
            _ => Err(Error::data_validation(format!(
                "Invalid EV type '{}': must be BEV or PHEV",
                s
            ))),
        }
    }
}

impl std::fmt::Display for EvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Vehicle Record
// =============================================================================

/// One registered vehicle as parsed from the registration dataset
///
/// Records are created once per parse pass and never mutated afterwards;
/// filtering and sorting always produce new sequences. Every field is
/// populated: columns missing from the source file yield the defaults
/// (empty strings, zero numbers, [`EvType::Bev`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Unique identifier within one parse pass
    pub id: String,

    /// Vehicle identification number (often truncated to 10 characters)
    pub vin: String,

    pub county: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,

    /// Model year, 0 when unknown
    pub model_year: u32,

    pub make: String,
    pub model: String,

    /// Drivetrain classification
    pub ev_type: EvType,

    /// All-electric range in miles, 0 when unknown
    pub electric_range: u32,

    /// Base manufacturer's suggested retail price, 0 when unknown
    pub base_msrp: f64,

    pub legislative_district: String,
    pub dol_vehicle_id: String,
    pub vehicle_location: String,
    pub electric_utility: String,
    pub census_tract: String,
}

impl VehicleRecord {
    /// Model year in the string form used by year filters
    pub fn model_year_label(&self) -> String {
        self.model_year.to_string()
    }

    /// Check whether this vehicle is a plug-in hybrid
    pub fn is_phev(&self) -> bool {
        self.ev_type == EvType::Phev
    }
}
