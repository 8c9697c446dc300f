//! Fixed-size paging over a sorted record sequence

use serde::Serialize;

use crate::app::models::VehicleRecord;
use crate::{Error, Result};

/// One page of table rows plus the counters shown beside it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage {
    pub rows: Vec<VehicleRecord>,

    /// 1-based page number actually shown after clamping
    pub page: usize,

    /// Zero when there are no rows
    pub total_pages: usize,

    pub total_rows: usize,

    /// 1-based position of the first row on this page, 0 when empty
    pub first_row: usize,

    /// 1-based position of the last row on this page, 0 when empty
    pub last_row: usize,
}

impl TablePage {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Showing 1-15 of 25 vehicles" style caption
    pub fn caption(&self) -> String {
        if self.is_empty() {
            "No vehicles to show".to_string()
        } else {
            format!(
                "Showing {}-{} of {} vehicles",
                self.first_row, self.last_row, self.total_rows
            )
        }
    }
}

/// Cut one page out of `records`
///
/// `page` is 1-based and clamped into `1..=total_pages`. A zero
/// `page_size` is a configuration error.
pub fn paginate(records: &[VehicleRecord], page: usize, page_size: usize) -> Result<TablePage> {
    if page_size == 0 {
        return Err(Error::configuration("page size must be greater than 0"));
    }

    let total_rows = records.len();
    let total_pages = total_rows.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_rows);
    let rows = records.get(start..end).unwrap_or_default().to_vec();

    let (first_row, last_row) = if rows.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Ok(TablePage {
        rows,
        page,
        total_pages,
        total_rows,
        first_row,
        last_row,
    })
}
