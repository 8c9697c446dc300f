//! Tests for table pagination

use super::super::{TableState, paginate, table_page};
use super::{create_numbered_rows, create_row, ids};
use crate::Error;

#[test]
fn test_first_page() {
    let rows = create_numbered_rows(25);
    let page = paginate(&rows, 1, 10).unwrap();

    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_rows, 25);
    assert_eq!(page.first_row, 1);
    assert_eq!(page.last_row, 10);
    assert!(!page.has_previous());
    assert!(page.has_next());
    assert_eq!(page.caption(), "Showing 1-10 of 25 vehicles");
}

#[test]
fn test_last_partial_page() {
    let rows = create_numbered_rows(25);
    let page = paginate(&rows, 3, 10).unwrap();

    assert_eq!(ids(&page.rows), vec!["21", "22", "23", "24", "25"]);
    assert_eq!(page.first_row, 21);
    assert_eq!(page.last_row, 25);
    assert!(page.has_previous());
    assert!(!page.has_next());
}

#[test]
fn test_out_of_range_pages_are_clamped() {
    let rows = create_numbered_rows(25);

    let past_end = paginate(&rows, 99, 10).unwrap();
    assert_eq!(past_end.page, 3);
    assert_eq!(past_end.first_row, 21);

    let page_zero = paginate(&rows, 0, 10).unwrap();
    assert_eq!(page_zero.page, 1);
    assert_eq!(page_zero.rows[0].id, "1");
}

#[test]
fn test_exact_multiple_of_page_size() {
    let rows = create_numbered_rows(30);
    let page = paginate(&rows, 3, 15).unwrap();

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.rows.len(), 15);
}

#[test]
fn test_empty_input_has_no_pages() {
    let page = paginate(&[], 1, 15).unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_rows, 0);
    assert_eq!(page.page, 1);
    assert_eq!(page.first_row, 0);
    assert_eq!(page.last_row, 0);
    assert!(!page.has_next());
    assert_eq!(page.caption(), "No vehicles to show");
}

#[test]
fn test_zero_page_size_is_error() {
    let err = paginate(&create_numbered_rows(3), 1, 0).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_table_page_sorts_before_paging() {
    let rows = vec![
        create_row("old", 2019, "NISSAN", "", 100),
        create_row("new", 2024, "TESLA", "", 300),
        create_row("mid", 2022, "KIA", "", 250),
    ];

    let page = table_page(&rows, &TableState::default(), 1, 2).unwrap();

    assert_eq!(ids(&page.rows), vec!["new", "mid"]);
    assert_eq!(page.total_pages, 2);
}
