//! Distinct values offered in the filter menus

use serde::Serialize;
use std::collections::BTreeSet;

use crate::app::models::{EvType, VehicleRecord};

/// Menu choices computed once from the unfiltered dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct positive model years, newest first
    pub years: Vec<u32>,

    /// Distinct makes in ascending order
    pub makes: Vec<String>,

    /// Always both EV types, regardless of the data
    pub ev_types: Vec<EvType>,
}

impl FilterOptions {
    /// Collect menu choices from the full record set
    ///
    /// Unknown years (0) are not offered.
    pub fn from_records(records: &[VehicleRecord]) -> Self {
        let years: BTreeSet<u32> = records
            .iter()
            .map(|record| record.model_year)
            .filter(|&year| year > 0)
            .collect();
        let makes: BTreeSet<&str> = records.iter().map(|record| record.make.as_str()).collect();

        Self {
            years: years.into_iter().rev().collect(),
            makes: makes.into_iter().map(str::to_string).collect(),
            ev_types: EvType::all_values().to_vec(),
        }
    }

    /// Year choices in the string form accepted by the year filter
    pub fn year_labels(&self) -> Vec<String> {
        self.years.iter().map(u32::to_string).collect()
    }

    /// Check whether `make` is one of the offered makes
    pub fn has_make(&self, make: &str) -> bool {
        self.makes.binary_search_by(|m| m.as_str().cmp(make)).is_ok()
    }
}
