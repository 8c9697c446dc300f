//! Parsing statistics and result structures for registration parsing
//!
//! This module provides types for tracking parse success rates and skipped
//! rows, and for handing parsed records to downstream aggregation.

use serde::{Deserialize, Serialize};

use crate::app::models::VehicleRecord;
use crate::constants::PARSE_SUCCESS_THRESHOLD;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed records, in source line order
    pub records: Vec<VehicleRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of non-empty data lines encountered (header excluded)
    pub total_lines: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of rows skipped as malformed
    pub rows_skipped: usize,

    /// Logical fields that had no matching header column
    pub missing_fields: Vec<String>,

    /// List of parsing errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            records_parsed: 0,
            rows_skipped: 0,
            missing_fields: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Record a skipped row with its reason
    pub fn add_skipped(&mut self, message: String) {
        self.rows_skipped += 1;
        self.errors.push(message);
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > PARSE_SUCCESS_THRESHOLD
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} of {} rows ({:.1}% success), {} skipped",
            self.records_parsed,
            self.total_lines,
            self.success_rate(),
            self.rows_skipped
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
