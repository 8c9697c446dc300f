//! Application constants for the EV dashboard
//!
//! This module contains default values, header alias tables, and labels
//! used throughout the parsing, aggregation and presentation layers.

// =============================================================================
// Dataset Location
// =============================================================================

/// Default path of the registration dataset, relative to the working directory
pub const DEFAULT_DATASET_PATH: &str = "ev-data.csv";

/// Application directory name used under the user's config directory
pub const CONFIG_DIR_NAME: &str = "ev-dashboard";

/// Config file name looked up inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "EV_DASHBOARD_";

/// Bundled sample dataset used when the configured dataset cannot be fetched
pub const FALLBACK_DATASET_CSV: &str = include_str!("../data/sample_ev_data.csv");

// =============================================================================
// Parsing
// =============================================================================

/// Field separator for registration files
pub const FIELD_DELIMITER: char = ',';

/// Quote character that toggles a literal-comma region
pub const QUOTE_CHAR: char = '"';

/// UTF-8 byte order mark written by some spreadsheet exports
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Substring that marks a plug-in hybrid in the EV type column
pub const PHEV_MARKER: &str = "PHEV";

/// Prefix of synthesized record identifiers (`record_<line index>`)
pub const SYNTHETIC_ID_PREFIX: &str = "record_";

/// Accepted normalized header aliases per logical field, checked in order
pub mod header_aliases {
    pub const ID: &[&str] = &["id"];
    pub const VIN: &[&str] = &["vin", "vin 1-10"];
    pub const COUNTY: &[&str] = &["county"];
    pub const CITY: &[&str] = &["city"];
    pub const STATE: &[&str] = &["state"];
    pub const POSTAL_CODE: &[&str] = &["postalcode", "postal code", "zip"];
    pub const MODEL_YEAR: &[&str] = &["modelyear", "model year", "year"];
    pub const MAKE: &[&str] = &["make"];
    pub const MODEL: &[&str] = &["model"];
    pub const EV_TYPE: &[&str] = &["evtype", "electric vehicle type"];
    pub const ELECTRIC_RANGE: &[&str] = &["electricrange", "electric range", "range"];
    pub const BASE_MSRP: &[&str] = &["basemsrp", "base msrp", "msrp"];
    pub const LEGISLATIVE_DISTRICT: &[&str] = &["legislativedistrict", "legislative district"];
    pub const DOL_VEHICLE_ID: &[&str] = &["dolvehicleid", "dol vehicle id"];
    pub const VEHICLE_LOCATION: &[&str] = &["vehiclelocation", "vehicle location"];
    pub const ELECTRIC_UTILITY: &[&str] = &["electricutility", "electric utility"];
    pub const CENSUS_TRACT: &[&str] = &["censustract", "2020 census tract"];
}

/// Parse success rate (percent) above which a pass counts as successful
pub const PARSE_SUCCESS_THRESHOLD: f64 = 90.0;

// =============================================================================
// Aggregation Defaults
// =============================================================================

/// Number of makes ranked in every summary
pub const DEFAULT_TOP_MAKES: usize = 10;

/// Number of counties ranked in the filtered dashboard summary
pub const DEFAULT_TOP_COUNTIES: usize = 5;

/// Number of counties ranked in the all-data overview summary
pub const OVERVIEW_TOP_COUNTIES: usize = 10;

// =============================================================================
// Table Defaults
// =============================================================================

/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Upper bound accepted for a configured page size
pub const MAX_PAGE_SIZE: usize = 10_000;

// =============================================================================
// Chart Titles
// =============================================================================

pub mod chart_titles {
    pub const TOP_MAKES: &str = "Top EV Manufacturers";
    pub const ADOPTION_BY_YEAR: &str = "EV Adoption by Year";
    pub const EV_TYPE_SPLIT: &str = "EV Type Distribution";
    pub const TOP_COUNTIES: &str = "Top Counties by EV Count";
}

/// Dataset labels shown in chart legends
pub mod series_labels {
    pub const VEHICLE_COUNT: &str = "Number of Vehicles";
    pub const REGISTRATIONS: &str = "EV Registrations";
    pub const EV_TYPES: &str = "EV Types";
}
