//! Charts command implementation
//!
//! Prints the four dashboard chart series, as text bar charts or JSON.

use super::shared::{
    load_configuration, load_dashboard, print_human_header, print_json, report_metadata,
    setup_logging, text_bar,
};
use crate::Result;
use crate::app::services::chart_series::ChartSeries;
use crate::cli::args::{ChartsArgs, OutputFormat};
use colored::*;
use serde_json::json;
use tracing::debug;

const BAR_WIDTH: usize = 40;

/// Charts command runner
pub async fn run_charts(args: ChartsArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Charts arguments: {:?}", args);
    args.common.validate()?;

    let config = load_configuration(&args.common)?;
    let dashboard = load_dashboard(&args.common, &config).await?;
    let charts = dashboard.charts();

    match args.common.output_format {
        OutputFormat::Human => {
            print_human_header("EV Dashboard Charts", &dashboard);
            for series in charts.iter() {
                print_series(series);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "metadata": report_metadata(&dashboard),
            "charts": charts,
        })),
    }
}

fn print_series(series: &ChartSeries) {
    println!("{}", series.title.bright_cyan().bold());

    if series.is_empty() {
        println!("   (no data)\n");
        return;
    }

    let label_width = series
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = series.max_value();

    for (label, value) in series.points() {
        println!(
            "   {:<width$}  {:>6}  {}",
            label,
            value,
            text_bar(value, max, BAR_WIDTH).bright_blue(),
            width = label_width
        );
    }
    println!();
}
