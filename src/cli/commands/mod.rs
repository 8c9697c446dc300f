//! Command implementations for the EV dashboard CLI
//!
//! Each command is implemented in its own module; [`shared`] holds the
//! logging, configuration and dataset loading steps they all start with.

pub mod charts;
pub mod options;
pub mod shared;
pub mod summary;
pub mod table;

use crate::cli::args::Commands;
use anyhow::{Context, Result};

/// Main command runner for the EV dashboard
///
/// This function dispatches to the appropriate subcommand handler:
/// - `summary`: metric cards, rankings and distributions
/// - `table`: sorted, paginated records
/// - `options`: filter menu choices
/// - `charts`: chart-ready series
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Summary(args) => summary::run_summary(args)
            .await
            .context("summary command failed"),
        Commands::Table(args) => table::run_table(args)
            .await
            .context("table command failed"),
        Commands::Options(args) => options::run_options(args)
            .await
            .context("options command failed"),
        Commands::Charts(args) => charts::run_charts(args)
            .await
            .context("charts command failed"),
    }
}
