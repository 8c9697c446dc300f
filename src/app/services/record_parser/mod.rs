//! Record parser for EV registration text
//!
//! This module turns raw delimited registration text into an ordered sequence
//! of [`VehicleRecord`]s. It is tolerant by construction: header names may
//! vary, fields may be quoted, malformed rows are skipped and unparseable
//! numbers fall back to zero. A parse pass never fails as a whole.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Line splitting and pass orchestration
//! - [`header`] - Header row extraction and cell normalization
//! - [`column_mapping`] - Alias table and logical field to column index mapping
//! - [`line_splitter`] - Quote-aware field splitting
//! - [`record_parser`] - Individual row to record conversion
//! - [`field_parsers`] - Lenient numeric parsing and field lookup
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ev_dashboard::app::services::record_parser::RecordParser;
//!
//! let text = "Model Year,Make,Electric Range\n2022,TESLA,300\n2021,NISSAN,150\n";
//! let result = RecordParser::new().parse_text(text);
//!
//! assert_eq!(result.records.len(), 2);
//! assert_eq!(result.stats.records_parsed, 2);
//! ```
//!
//! [`VehicleRecord`]: crate::app::models::VehicleRecord

pub mod column_mapping;
pub mod field_parsers;
pub mod header;
pub mod line_splitter;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, RecordField};
pub use header::HeaderRow;
pub use parser::RecordParser;
pub use stats::{ParseResult, ParseStats};

use crate::app::models::VehicleRecord;

/// Parse registration text into records, discarding statistics
pub fn parse(text: &str) -> Vec<VehicleRecord> {
    RecordParser::new().parse_text(text).records
}
