//! EV Dashboard Library
//!
//! A Rust library for turning electric-vehicle registration datasets into
//! dashboard-ready analytics.
//!
//! This library provides tools for:
//! - Parsing registration CSV text with header-alias matching and quoted fields
//! - Aggregating distributions, top-N rankings and BEV/PHEV shares
//! - Filtering by model year, make and EV type with fresh re-aggregation
//! - Sorting and paginating records for tabular display
//! - Building chart-ready label/value series
//! - Loading the dataset with a bundled fallback when the source is unavailable

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod chart_series;
        pub mod dashboard;
        pub mod dataset_loader;
        pub mod filter_engine;
        pub mod record_parser;
        pub mod record_table;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{EvType, VehicleRecord};
pub use app::services::aggregator::{AggregateSummary, summarize, summarize_overview};
pub use app::services::filter_engine::{FilterCriteria, apply_filters};
pub use app::services::record_parser::parse;
pub use config::Config;

/// Result type alias for the EV dashboard
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for EV dashboard operations
///
/// The analytics core never fails on bad data: malformed rows are skipped and
/// unparseable numbers default to zero. These variants cover the outer
/// surfaces (I/O, configuration, output) and per-row extraction failures
/// that the parser records before moving on.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset could not be fetched from its configured location
    #[error("Dataset unavailable at '{location}': {message}")]
    DatasetUnavailable { location: String, message: String },

    /// A single row could not be turned into a record
    #[error("Field extraction failed on line {line}: {message}")]
    FieldExtraction { line: usize, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Output serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a dataset unavailable error
    pub fn dataset_unavailable(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DatasetUnavailable {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a field extraction error for a 0-based line index
    pub fn field_extraction(line: usize, message: impl Into<String>) -> Self {
        Self::FieldExtraction {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<figment::Error> for Error {
    fn from(error: figment::Error) -> Self {
        Self::Configuration {
            message: error.to_string(),
        }
    }
}
