use clap::Parser;
use ev_dashboard::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    // Create async runtime and run the command with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(command) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(ev_dashboard::Error::processing_interrupted("Interrupted by user").into())
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("EV Dashboard - Electric Vehicle Registration Analytics");
    println!("======================================================");
    println!();
    println!("Summarize, filter and tabulate an electric-vehicle registration");
    println!("dataset exported as CSV.");
    println!();
    println!("USAGE:");
    println!("    ev-dashboard <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summary     Metric cards, top makes and counties, distributions");
    println!("    table       Sorted, paginated vehicle records");
    println!("    options     Available model years, makes and EV types");
    println!("    charts      Chart series for the filtered records");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize the default dataset (ev-data.csv):");
    println!("    ev-dashboard summary");
    println!();
    println!("    # Tesla registrations for 2022 as JSON:");
    println!("    ev-dashboard summary --make TESLA --year 2022 --output-format json");
    println!();
    println!("    # Second page of plug-in hybrids, longest range first:");
    println!("    ev-dashboard table --ev-type PHEV --sort-by electric_range --descending --page 2");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ev-dashboard <COMMAND> --help");
}
