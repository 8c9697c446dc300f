//! Sorted, paginated table view of vehicle records
//!
//! The table consumes the filtered record sequence. Sorting is stable and
//! returns a new vector; pagination slices the sorted vector into fixed-size
//! 1-based pages.
//!
//! ## Usage
//!
//! ```rust
//! use ev_dashboard::app::services::record_parser::parse;
//! use ev_dashboard::app::services::record_table::{TableState, paginate};
//!
//! let records = parse("Model Year,Make\n2021,NISSAN\n2023,TESLA\n2022,KIA\n");
//! let sorted = TableState::default().sort(&records);
//! let page = paginate(&sorted, 1, 2).unwrap();
//!
//! assert_eq!(page.rows[0].make, "TESLA");
//! assert_eq!(page.total_pages, 2);
//! ```

pub mod pagination;
pub mod sorting;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use pagination::{TablePage, paginate};
pub use sorting::{SortDirection, SortField, TableState, compare_by, sort_records};

use crate::Result;
use crate::app::models::VehicleRecord;

/// Sort `records` under `state` and return the requested page
pub fn table_page(
    records: &[VehicleRecord],
    state: &TableState,
    page: usize,
    page_size: usize,
) -> Result<TablePage> {
    paginate(&state.sort(records), page, page_size)
}
