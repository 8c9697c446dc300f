//! Filter engine for the dashboard views
//!
//! Narrows a record sequence by exact-match constraints on model year, make
//! and EV type, and discovers the distinct values offered in filter menus.
//! Filtering always produces a new sequence in source order; the caller
//! re-summarizes it rather than adjusting an earlier summary.
//!
//! ## Usage
//!
//! ```rust
//! use ev_dashboard::app::services::filter_engine::{FilterCriteria, apply_filters};
//! use ev_dashboard::app::services::record_parser::parse;
//!
//! let records = parse("Model Year,Make\n2022,TESLA\n2021,NISSAN\n2022,KIA\n");
//! let criteria = FilterCriteria::new().with_year("2022");
//!
//! let filtered = apply_filters(&records, &criteria);
//! assert_eq!(filtered.len(), 2);
//! ```

pub mod criteria;
pub mod options;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use criteria::{FilterCriteria, apply_filters};
pub use options::FilterOptions;
