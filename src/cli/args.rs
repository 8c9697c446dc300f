//! Command-line argument definitions for the EV dashboard
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Every subcommand shares the dataset, configuration, logging and filter
//! flags in [`CommonArgs`].

use crate::app::models::EvType;
use crate::app::services::filter_engine::FilterCriteria;
use crate::app::services::record_table::{SortDirection, SortField, TableState};
use crate::config::Config;
use crate::constants::MAX_PAGE_SIZE;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the EV registration dashboard
///
/// Loads an electric-vehicle registration dataset and prints dashboard
/// views of it: metric summaries, sortable tables, filter menus and chart
/// series.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ev-dashboard",
    version,
    about = "Analytics dashboard for electric-vehicle registration datasets",
    long_about = "Parses an electric-vehicle registration CSV export, filters it by model year, \
                  make and EV type, and prints summary metrics, a sorted and paginated table, \
                  filter menu choices or chart-ready series. Falls back to a bundled sample \
                  dataset when the configured file can't be read."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print metric cards, rankings and distributions
    Summary(SummaryArgs),
    /// Print a sorted page of the filtered records
    Table(TableArgs),
    /// Print the available filter choices
    Options(OptionsArgs),
    /// Print the chart series for the filtered records
    Charts(ChartsArgs),
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// Registration dataset to load (overrides data.dataset_path)
    #[arg(long = "data", value_name = "PATH", help = "Registration CSV file to load")]
    pub data_path: Option<PathBuf>,

    /// Configuration file path
    ///
    /// Without this flag the per-user config file is used if it exists.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config_file: Option<PathBuf>,

    /// Fail instead of falling back to the bundled sample dataset
    #[arg(long = "no-fallback", help = "Fail if the dataset can't be read")]
    pub no_fallback: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    /// Model year filter, matched exactly against the year as written
    #[arg(long = "year", value_name = "YEAR", help = "Only include this model year")]
    pub year: Option<String>,

    /// Make filter, matched exactly (makes are usually upper case)
    #[arg(long = "make", value_name = "MAKE", help = "Only include this make")]
    pub make: Option<String>,

    #[arg(
        long = "ev-type",
        value_name = "TYPE",
        help = "Only include this EV type (BEV or PHEV)"
    )]
    pub ev_type: Option<EvType>,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Summarize the whole dataset with the wider county ranking
    #[arg(
        long = "overview",
        help = "Summarize the unfiltered dataset (top 10 counties)"
    )]
    pub overview: bool,
}

/// Arguments for the table command
#[derive(Debug, Clone, Parser)]
pub struct TableArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Column to sort by; defaults to model_year, newest first
    #[arg(long = "sort-by", value_name = "FIELD", help = "Record field to sort by")]
    pub sort_by: Option<SortField>,

    #[arg(long = "descending", help = "Sort in descending order")]
    pub descending: bool,

    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        help = "Page number (1-based)"
    )]
    pub page: usize,

    #[arg(
        long = "page-size",
        value_name = "N",
        help = "Rows per page (overrides dashboard.page_size)"
    )]
    pub page_size: Option<usize>,
}

/// Arguments for the options command
#[derive(Debug, Clone, Parser)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the charts command
#[derive(Debug, Clone, Parser)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Commands {
    /// Flags shared by every subcommand
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Summary(args) => &args.common,
            Commands::Table(args) => &args.common,
            Commands::Options(args) => &args.common,
            Commands::Charts(args) => &args.common,
        }
    }
}

impl CommonArgs {
    /// Validate the shared arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(year) = &self.year {
            if !year.is_empty() && year.parse::<u32>().is_err() {
                return Err(Error::data_validation(format!(
                    "Invalid model year '{}': must be a number such as 2022",
                    year
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Filter selections given on the command line
    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            year: self.year.clone(),
            make: self.make.clone(),
            ev_type: self.ev_type.map(|ev_type| ev_type.as_str().to_string()),
        }
    }

    /// Apply command-line overrides on top of the layered configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(data_path) = &self.data_path {
            config.data.dataset_path = data_path.clone();
        }
        if self.no_fallback {
            config.data.fallback_on_error = false;
        }
    }
}

impl SummaryArgs {
    /// Validate the summary arguments
    ///
    /// The overview always covers the whole dataset, so filter flags are
    /// rejected alongside `--overview`.
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;

        if self.overview && !self.common.filter_criteria().is_empty() {
            return Err(Error::configuration(format!(
                "--overview summarizes the unfiltered dataset and cannot be combined with filters ({})",
                self.common.filter_criteria().describe()
            )));
        }

        Ok(())
    }
}

impl TableArgs {
    /// Sort state requested on the command line
    pub fn table_state(&self) -> TableState {
        match self.sort_by {
            Some(field) if self.descending => TableState::new(field, SortDirection::Descending),
            Some(field) => TableState::new(field, SortDirection::Ascending),
            None => TableState::default(),
        }
    }

    /// Validate the table arguments
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;

        match self.page_size {
            Some(0) => {
                return Err(Error::configuration(
                    "Page size must be greater than 0".to_string(),
                ));
            }
            Some(size) if size > MAX_PAGE_SIZE => {
                return Err(Error::configuration(format!(
                    "Page size must be at most {}, got {}",
                    MAX_PAGE_SIZE, size
                )));
            }
            _ => {}
        }

        Ok(())
    }
}
