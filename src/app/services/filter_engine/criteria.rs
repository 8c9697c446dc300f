//! Filter criteria and predicate evaluation

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::{EvType, VehicleRecord};

/// Current filter selections
///
/// Each constraint is optional; `None` and the empty string both mean "no
/// constraint". Matching is exact string equality: the year is compared
/// against the decimal form of `model_year`, the EV type against the
/// `"BEV"`/`"PHEV"` label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub year: Option<String>,
    pub make: Option<String>,
    pub ev_type: Option<String>,
}

impl FilterCriteria {
    /// Criteria with no constraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the model year
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Constrain the make
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Constrain the EV type label
    pub fn with_ev_type(mut self, ev_type: impl Into<String>) -> Self {
        self.ev_type = Some(ev_type.into());
        self
    }

    /// Constrain the EV type from a classified value
    pub fn with_ev_type_value(self, ev_type: EvType) -> Self {
        self.with_ev_type(ev_type.as_str())
    }

    /// Check whether no constraint is active
    pub fn is_empty(&self) -> bool {
        active(&self.year).is_none()
            && active(&self.make).is_none()
            && active(&self.ev_type).is_none()
    }

    /// Clear every constraint
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check a single record against every active constraint
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        if let Some(year) = active(&self.year) {
            if record.model_year_label() != year {
                return false;
            }
        }
        if let Some(make) = active(&self.make) {
            if record.make != make {
                return false;
            }
        }
        if let Some(ev_type) = active(&self.ev_type) {
            if record.ev_type.as_str() != ev_type {
                return false;
            }
        }
        true
    }

    /// Short description of the active constraints for logs and headings
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(year) = active(&self.year) {
            parts.push(format!("year={}", year));
        }
        if let Some(make) = active(&self.make) {
            parts.push(format!("make={}", make));
        }
        if let Some(ev_type) = active(&self.ev_type) {
            parts.push(format!("type={}", ev_type));
        }

        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// A constraint value that actually constrains
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Return the records that satisfy every active constraint, in source order
pub fn apply_filters(records: &[VehicleRecord], criteria: &FilterCriteria) -> Vec<VehicleRecord> {
    let filtered: Vec<VehicleRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    debug!(
        "Filter ({}) kept {} of {} records",
        criteria.describe(),
        filtered.len(),
        records.len()
    );

    filtered
}
