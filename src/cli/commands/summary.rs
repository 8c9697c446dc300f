//! Summary command implementation
//!
//! Prints the dashboard metric cards, the make and county rankings and the
//! year and EV type distributions for the filtered records, or for the whole
//! dataset with `--overview`.

use super::shared::{
    load_configuration, load_dashboard, print_human_header, print_json, report_metadata,
    setup_logging, text_bar,
};
use crate::Result;
use crate::app::services::aggregator::{AggregateSummary, RankedEntry};
use crate::app::services::dashboard::Dashboard;
use crate::cli::args::{OutputFormat, SummaryArgs};
use colored::*;
use serde_json::json;
use tracing::{debug, info};

/// Summary command runner
pub async fn run_summary(args: SummaryArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Summary arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.common)?;
    let dashboard = load_dashboard(&args.common, &config).await?;

    let summary = if args.overview {
        info!("Summarizing unfiltered dataset (overview)");
        dashboard.overview()
    } else {
        dashboard.summary().clone()
    };

    match args.common.output_format {
        OutputFormat::Human => print_human_summary(&dashboard, &summary, args.overview),
        OutputFormat::Json => print_json(&json!({
            "metadata": report_metadata(&dashboard),
            "overview": args.overview,
            "summary": summary,
        })),
    }
}

fn print_human_summary(
    dashboard: &Dashboard,
    summary: &AggregateSummary,
    overview: bool,
) -> Result<()> {
    let title = if overview {
        "EV Registration Overview"
    } else {
        "EV Registration Summary"
    };
    print_human_header(title, dashboard);

    if dashboard.has_no_data() {
        println!("{}", "No EV data available".bright_red().bold());
        return Ok(());
    }
    if summary.is_empty() {
        println!("{}", "No vehicles match the current filters".yellow());
        return Ok(());
    }

    println!(
        "Total EV Vehicles:     {}",
        summary.total_vehicles.to_string().bright_white().bold()
    );
    println!(
        "Unique Manufacturers:  {}",
        summary.unique_makes.to_string().bright_white().bold()
    );
    println!(
        "Average Range:         {} miles per charge",
        summary.average_range.to_string().bright_white().bold()
    );
    println!(
        "BEV vs PHEV:           {} ({} BEV, {} PHEV; {}% PHEV)",
        format!("{}%", summary.bev_percentage).bright_white().bold(),
        summary.bev_count,
        summary.phev_count,
        summary.phev_percentage
    );

    print_ranking("Top Manufacturers", &summary.top_makes);
    print_ranking("Top Counties", &summary.top_counties);

    println!("\n{}", "Registrations by Model Year".bright_cyan().bold());
    let mut years: Vec<(u32, usize)> = summary
        .year_distribution
        .iter()
        .map(|(year, count)| (*year, count))
        .collect();
    years.sort_by(|a, b| b.0.cmp(&a.0));
    for (year, count) in years {
        let label = if year == 0 {
            "unknown".to_string()
        } else {
            year.to_string()
        };
        println!("   • {:<8} {}", label, count);
    }

    println!("\n{}", "EV Types".bright_cyan().bold());
    for (ev_type, count) in summary.ev_type_distribution.iter() {
        println!(
            "   • {:<24} {} ({}%)",
            ev_type.description(),
            count,
            summary.ev_type_distribution.share(ev_type)
        );
    }

    println!();
    Ok(())
}

fn print_ranking(title: &str, entries: &[RankedEntry<String>]) {
    println!("\n{}", title.bright_cyan().bold());
    let max = entries.first().map(|entry| entry.count).unwrap_or(0);
    for (rank, entry) in entries.iter().enumerate() {
        println!(
            "   {:>2}. {:<20} {:>6}  {}",
            rank + 1,
            entry.key,
            entry.count,
            text_bar(entry.count, max, 30).bright_blue()
        );
    }
}
