//! Core registration parser implementation
//!
//! This module provides the parse pass orchestration: locating the header,
//! resolving the column mapping, and feeding each data line through the row
//! parser while tracking statistics.

use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::header::HeaderRow;
use super::line_splitter::split_line;
use super::record_parser::parse_vehicle_record;
use super::stats::{ParseResult, ParseStats};
use crate::constants::BYTE_ORDER_MARK;

/// Parser for EV registration text
///
/// This parser focuses on partial-failure tolerance:
/// - Header names are matched through an alias table
/// - Rows with too few fields are skipped, not fatal
/// - Unparseable numbers default to zero
/// - A row that fails extraction is logged and skipped
#[derive(Debug, Clone, Default)]
pub struct RecordParser;

impl RecordParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse registration text and return records with statistics
    pub fn parse_text(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let lines: Vec<&str> = text.split('\n').collect();

        let Some(header_index) = lines.iter().position(|line| !line.trim().is_empty()) else {
            debug!("Input contains no header row");
            return ParseResult { records, stats };
        };

        let header = HeaderRow::parse(lines[header_index]);
        let mapping = ColumnMapping::analyze(&header);
        let (header_cols, mapped_fields) = mapping.stats();
        debug!(
            "Column mapping: {} header columns, {} fields mapped",
            header_cols, mapped_fields
        );

        stats.missing_fields = mapping
            .missing_fields()
            .into_iter()
            .map(|field| field.name().to_string())
            .collect();
        if !stats.missing_fields.is_empty() {
            debug!(
                "Fields without a header column (defaults used): {}",
                stats.missing_fields.join(", ")
            );
        }

        for (line_index, raw_line) in lines.iter().enumerate().skip(header_index + 1) {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            stats.total_lines += 1;

            let fields = split_line(line);
            if fields.len() < mapping.field_count {
                stats.add_skipped(format!(
                    "Line {}: expected {} fields, found {}",
                    line_index,
                    mapping.field_count,
                    fields.len()
                ));
                debug!(
                    "Skipped malformed line {} ({} of {} fields)",
                    line_index,
                    fields.len(),
                    mapping.field_count
                );
                continue;
            }

            match parse_vehicle_record(&fields, &mapping, line_index) {
                Ok(record) => {
                    records.push(record);
                    stats.records_parsed += 1;
                }
                Err(e) => {
                    warn!("Error parsing line {}: {}", line_index, e);
                    stats.add_skipped(format!("Line {}: {}", line_index, e));
                }
            }
        }

        info!("{}", stats.summary());

        ParseResult { records, stats }
    }
}
