//! Header row extraction and normalization
//!
//! Registration exports name their columns inconsistently ("Model Year",
//! "modelYear", "MODEL YEAR ", "Electric Range (mi)"...). Every header cell is
//! reduced to a normalized form before it is matched against the alias table.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{FIELD_DELIMITER, QUOTE_CHAR};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Parsed header row
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    /// Header cells as they appeared (trimmed, quotes removed)
    pub raw_cells: Vec<String>,

    /// Normalized cells used for alias matching
    pub normalized_cells: Vec<String>,
}

impl HeaderRow {
    /// Parse a header line
    ///
    /// Header cells are split on every comma; quote characters are stripped
    /// rather than interpreted.
    pub fn parse(line: &str) -> Self {
        let raw_cells: Vec<String> = line
            .split(FIELD_DELIMITER)
            .map(|cell| cell.trim().replace(QUOTE_CHAR, ""))
            .collect();

        let normalized_cells = raw_cells.iter().map(|cell| normalize_cell(cell)).collect();

        Self {
            raw_cells,
            normalized_cells,
        }
    }

    /// Number of columns declared by the header
    pub fn field_count(&self) -> usize {
        self.raw_cells.len()
    }

    /// Find the first alias present in the header and return its column index
    pub fn find_index(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            self.normalized_cells
                .iter()
                .position(|cell| cell == alias)
        })
    }
}

/// Normalize a header cell for alias matching
///
/// Trims, strips quotes, lower-cases, removes parentheses and collapses runs
/// of whitespace to a single space.
pub fn normalize_cell(cell: &str) -> String {
    let stripped: String = cell
        .trim()
        .chars()
        .filter(|c| *c != QUOTE_CHAR && *c != '(' && *c != ')')
        .collect::<String>()
        .to_lowercase();

    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}
