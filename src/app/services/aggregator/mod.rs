//! Aggregation of vehicle records into dashboard statistics
//!
//! This module reduces a record sequence to grouped counts, rankings and
//! BEV/PHEV shares. Aggregation is a pure function of its input: the
//! dashboard recomputes a fresh [`AggregateSummary`] for every filtered view
//! rather than patching a cached one.
//!
//! # Top-N Variants
//!
//! The filtered dashboard ranks the top 5 counties while the all-data
//! overview ranks the top 10. Both are the same [`Aggregator`] with a
//! different county depth; [`summarize`] and [`summarize_overview`] are the
//! named entry points.
//!
//! # Rounding
//!
//! Averages and percentages use `f64::round`, i.e. round half away from
//! zero. Empty inputs yield zero for every average and percentage.
//!
//! # Example Usage
//!
//! ```rust
//! use ev_dashboard::app::services::aggregator::summarize;
//! use ev_dashboard::app::services::record_parser::parse;
//!
//! let records = parse("Make,Electric Range\nTESLA,300\nNISSAN,150\nTESLA,300\n");
//! let summary = summarize(&records);
//!
//! assert_eq!(summary.total_vehicles, 3);
//! assert_eq!(summary.make_distribution.get(&"TESLA".to_string()), 2);
//! assert_eq!(summary.average_range, 250);
//! ```

pub mod distribution;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use distribution::{Distribution, RankedEntry, rounded_percentage};
pub use summary::{AggregateSummary, Aggregator};

use crate::app::models::VehicleRecord;

/// Summarize records for the filtered dashboard (top 10 makes, top 5 counties)
pub fn summarize(records: &[VehicleRecord]) -> AggregateSummary {
    Aggregator::dashboard().summarize(records)
}

/// Summarize records for the all-data overview (top 10 makes, top 10 counties)
pub fn summarize_overview(records: &[VehicleRecord]) -> AggregateSummary {
    Aggregator::overview().summarize(records)
}
