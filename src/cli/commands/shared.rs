//! Shared components for CLI commands
//!
//! This module contains logging setup, layered configuration loading,
//! dataset loading and the report envelope used by every command.

use crate::app::services::dashboard::Dashboard;
use crate::app::services::dataset_loader::DatasetLoader;
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde_json::{Value, json};
use std::io::Write;
use tracing::{debug, info, warn};

/// Set up structured logging based on the shared verbosity flags
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ev_dashboard={}", log_level)));

    let result = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load(args.config_file.as_deref())?;

    // Apply CLI argument overrides
    args.apply_overrides(&mut config);

    // Final validation
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Load the dataset and open a dashboard session with the CLI filters applied
pub async fn load_dashboard(args: &CommonArgs, config: &Config) -> Result<Dashboard> {
    let loaded = DatasetLoader::from_config(&config.data).load().await?;

    if let Some(error) = &loaded.load_error {
        warn!("Using bundled sample data: {}", error);
    }

    let mut dashboard = Dashboard::new(loaded, &config.dashboard);

    let criteria = args.filter_criteria();
    if !criteria.is_empty() {
        info!("Applying filters: {}", criteria.describe());
        dashboard.apply(criteria);
    }

    Ok(dashboard)
}

/// Metadata block shared by every JSON report
pub fn report_metadata(dashboard: &Dashboard) -> Value {
    json!({
        "dataset": dashboard.origin(),
        "load_error": dashboard.load_error(),
        "total_records": dashboard.all_records().len(),
        "filters_applied": dashboard.criteria(),
        "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    })
}

/// Print a JSON report to stdout
pub fn print_json(report: &Value) -> Result<()> {
    let json_string = serde_json::to_string_pretty(report)
        .map_err(|e| Error::serialization("Failed to serialize report", e))?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json_string).map_err(|e| Error::io("Failed to write report", e))
}

/// Print the dataset origin, fallback notice and active filters
pub fn print_human_header(title: &str, dashboard: &Dashboard) {
    println!("\n{}", title.bright_green().bold());
    println!("{}", "━".repeat(title.chars().count().max(40)));
    println!("Dataset: {}", dashboard.origin().to_string().bright_white());

    if let Some(error) = dashboard.load_error() {
        println!(
            "{} {}",
            "Showing sample data:".yellow().bold(),
            error.yellow()
        );
    }

    println!("Filters: {}", dashboard.criteria().describe());
    println!();
}

/// Bar of `width` cells proportional to `value / max`
pub fn text_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(cells.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::dataset_loader::load_fallback;
    use crate::config::DashboardConfig;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0, 0, 10), "");
        assert_eq!(text_bar(5, 10, 10), "█████");
        assert_eq!(text_bar(10, 10, 20).chars().count(), 20);
        assert_eq!(text_bar(1, 3, 3), "█");
    }

    #[test]
    fn test_report_metadata() {
        let dashboard = Dashboard::new(load_fallback(), &DashboardConfig::default());
        let metadata = report_metadata(&dashboard);

        assert_eq!(metadata["total_records"], 25);
        assert_eq!(metadata["dataset"]["kind"], "fallback");
        assert!(metadata["load_error"].is_null());
        assert!(metadata["generated_at"].as_str().unwrap().ends_with('Z'));
    }
}
