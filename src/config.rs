//! Configuration management and validation.
//!
//! Provides the dataset and dashboard settings, layered from built-in
//! defaults, an optional TOML file and `EV_DASHBOARD_` environment
//! variables.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATASET_PATH, DEFAULT_PAGE_SIZE,
    DEFAULT_TOP_COUNTIES, DEFAULT_TOP_MAKES, ENV_PREFIX, MAX_PAGE_SIZE, OVERVIEW_TOP_COUNTIES,
};
use crate::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the registration dataset comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the delimited text dataset
    pub dataset_path: PathBuf,

    /// Use the bundled sample dataset when the configured one can't be read
    pub fallback_on_error: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            fallback_on_error: true,
        }
    }
}

/// Ranking depths and table paging for the dashboard views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Number of makes in the top makes ranking
    pub top_makes: usize,

    /// Number of counties ranked for the filtered dashboard
    pub top_counties: usize,

    /// Number of counties ranked for the all-data overview
    pub overview_top_counties: usize,

    /// Rows per table page
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_makes: DEFAULT_TOP_MAKES,
            top_counties: DEFAULT_TOP_COUNTIES,
            overview_top_counties: OVERVIEW_TOP_COUNTIES,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Global configuration for the EV dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from defaults, a TOML file and the environment
    ///
    /// An explicit `config_file` must exist. Without one, the per-user file
    /// under the platform config directory is merged only when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::configuration(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => default_config_path().filter(|path| path.exists()),
        };

        if let Some(path) = &file {
            debug!("Loading configuration file: {}", path.display());
        }

        let config = Self::from_figment(Self::figment(file.as_deref()))?;
        debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Build the layered provider chain without extracting it
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and validate a configuration from any provider chain
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the dashboard views meaningless
    pub fn validate(&self) -> Result<()> {
        let dashboard = &self.dashboard;

        if dashboard.top_makes == 0 {
            return Err(Error::configuration("dashboard.top_makes must be > 0"));
        }
        if dashboard.top_counties == 0 {
            return Err(Error::configuration("dashboard.top_counties must be > 0"));
        }
        if dashboard.overview_top_counties == 0 {
            return Err(Error::configuration(
                "dashboard.overview_top_counties must be > 0",
            ));
        }
        if dashboard.page_size == 0 || dashboard.page_size > MAX_PAGE_SIZE {
            return Err(Error::configuration(format!(
                "dashboard.page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.data.dataset_path.as_os_str().is_empty() {
            return Err(Error::configuration("data.dataset_path must not be empty"));
        }

        Ok(())
    }

    /// Read the dataset from a different path
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data.dataset_path = path.into();
        self
    }

    /// Fail instead of falling back to the bundled sample dataset
    pub fn without_fallback(mut self) -> Self {
        self.data.fallback_on_error = false;
        self
    }

    /// Set the table page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.dashboard.page_size = page_size;
        self
    }

    /// Set the number of ranked makes
    pub fn with_top_makes(mut self, top_makes: usize) -> Self {
        self.dashboard.top_makes = top_makes;
        self
    }
}

/// Per-user configuration file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn from_toml(toml: &str) -> Result<Config> {
        Config::from_figment(
            Figment::from(Serialized::defaults(Config::default())).merge(Toml::string(toml)),
        )
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.data.dataset_path, PathBuf::from("ev-data.csv"));
        assert!(config.data.fallback_on_error);
        assert_eq!(config.dashboard.top_makes, 10);
        assert_eq!(config.dashboard.top_counties, 5);
        assert_eq!(config.dashboard.overview_top_counties, 10);
        assert_eq!(config.dashboard.page_size, 15);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = from_toml(
            r#"
            [data]
            dataset_path = "/srv/ev/registrations.csv"

            [dashboard]
            page_size = 50
            "#,
        )
        .unwrap();

        assert_eq!(
            config.data.dataset_path,
            PathBuf::from("/srv/ev/registrations.csv")
        );
        assert!(config.data.fallback_on_error);
        assert_eq!(config.dashboard.page_size, 50);
        assert_eq!(config.dashboard.top_counties, 5);
    }

    #[test]
    fn test_zero_values_rejected() {
        for toml in [
            "[dashboard]\npage_size = 0",
            "[dashboard]\ntop_makes = 0",
            "[dashboard]\ntop_counties = 0",
            "[dashboard]\noverview_top_counties = 0",
        ] {
            let err = from_toml(toml).unwrap_err();
            assert!(matches!(err, Error::Configuration { .. }), "{}", toml);
        }
    }

    #[test]
    fn test_wrong_type_is_configuration_error() {
        let err = from_toml("[dashboard]\npage_size = \"many\"").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[data]\nfallback_on_error = false").unwrap();
        writeln!(file, "[dashboard]\ntop_makes = 3").unwrap();

        let config = Config::load(Some(file.path())).unwrap();

        assert!(!config.data.fallback_on_error);
        assert_eq!(config.dashboard.top_makes, 3);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let err = Config::load(Some(Path::new("/nonexistent/ev-dashboard.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_dataset_path("data.csv")
            .with_page_size(25)
            .with_top_makes(4)
            .without_fallback();

        assert_eq!(config.data.dataset_path, PathBuf::from("data.csv"));
        assert_eq!(config.dashboard.page_size, 25);
        assert_eq!(config.dashboard.top_makes, 4);
        assert!(!config.data.fallback_on_error);
    }

    #[test]
    fn test_default_config_path_location() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("ev-dashboard/config.toml"));
        }
    }
}
