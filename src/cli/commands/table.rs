//! Table command implementation
//!
//! Prints one sorted page of the filtered records.

use super::shared::{
    load_configuration, load_dashboard, print_human_header, print_json, report_metadata,
    setup_logging,
};
use crate::Result;
use crate::app::models::VehicleRecord;
use crate::app::services::dashboard::Dashboard;
use crate::app::services::record_table::{TablePage, TableState};
use crate::cli::args::{OutputFormat, TableArgs};
use colored::*;
use serde_json::json;
use tracing::debug;

/// Table command runner
pub async fn run_table(args: TableArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Table arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.common)?;
    let dashboard = load_dashboard(&args.common, &config).await?;

    let state = args.table_state();
    let page_size = args.page_size.unwrap_or(config.dashboard.page_size);
    let page = dashboard.table_with_page_size(&state, args.page, page_size)?;
    debug!(
        "Table page {} of {} sorted by {} {}",
        page.page, page.total_pages, state.sort_field, state.direction
    );

    match args.common.output_format {
        OutputFormat::Human => {
            print_human_table(&dashboard, &state, &page);
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "metadata": report_metadata(&dashboard),
            "sort": {
                "field": state.sort_field.name(),
                "direction": state.direction,
            },
            "page_size": page_size,
            "table": page,
        })),
    }
}

fn print_human_table(dashboard: &Dashboard, state: &TableState, page: &TablePage) {
    print_human_header("EV Population Data", dashboard);

    if page.is_empty() {
        println!("{}", page.caption().yellow());
        return;
    }

    println!(
        "{}  (sorted by {} {}, page {} of {})",
        page.caption(),
        state.sort_field,
        state.direction,
        page.page,
        page.total_pages
    );
    println!();

    let header = format!(
        "{:<6} {:<12} {:<18} {:<5} {:>6}  {:<16} {:<12}",
        "Year", "Make", "Model", "Type", "Range", "City", "County"
    );
    println!("{}", header.bold());
    for record in &page.rows {
        println!("{}", format_row(record));
    }
    println!();
}

fn format_row(record: &VehicleRecord) -> String {
    format!(
        "{:<6} {:<12} {:<18} {:<5} {:>6}  {:<16} {:<12}",
        record.model_year_label(),
        truncate(&record.make, 12),
        truncate(&record.model, 18),
        record.ev_type.as_str(),
        record.electric_range,
        truncate(&record.city, 16),
        truncate(&record.county, 12)
    )
}

/// Cut `value` to at most `width` characters
fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}
