//! Options command implementation
//!
//! Prints the filter menu choices computed from the unfiltered dataset.

use super::shared::{
    load_configuration, load_dashboard, print_human_header, print_json, report_metadata,
    setup_logging,
};
use crate::Result;
use crate::app::services::dashboard::Dashboard;
use crate::cli::args::{OptionsArgs, OutputFormat};
use colored::*;
use serde_json::json;
use tracing::debug;

/// Options command runner
pub async fn run_options(args: OptionsArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Options arguments: {:?}", args);
    args.common.validate()?;

    let config = load_configuration(&args.common)?;
    let dashboard = load_dashboard(&args.common, &config).await?;

    match args.common.output_format {
        OutputFormat::Human => {
            print_human_options(&dashboard);
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "metadata": report_metadata(&dashboard),
            "options": dashboard.options(),
        })),
    }
}

fn print_human_options(dashboard: &Dashboard) {
    print_human_header("Filter Options", dashboard);
    let options = dashboard.options();

    println!("{}", "Model Years".bright_cyan().bold());
    println!("   {}", options.year_labels().join(", "));

    println!("\n{}", "Makes".bright_cyan().bold());
    for make in &options.makes {
        if make.is_empty() {
            println!("   • (blank)");
        } else {
            println!("   • {}", make);
        }
    }

    println!("\n{}", "EV Types".bright_cyan().bold());
    for ev_type in &options.ev_types {
        println!("   • {:<5} {}", ev_type.as_str(), ev_type.description());
    }
    println!();
}
