//! Dataset loading with fallback to the bundled sample

use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::source::{FileSource, TextSource};
use crate::Result;
use crate::app::models::VehicleRecord;
use crate::app::services::record_parser::{ParseStats, RecordParser};
use crate::config::DataConfig;
use crate::constants::FALLBACK_DATASET_CSV;

/// Where the loaded records actually came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "lowercase")]
pub enum DatasetOrigin {
    /// The configured source
    Source(String),

    /// The bundled sample dataset
    Fallback,
}

impl DatasetOrigin {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DatasetOrigin::Fallback)
    }
}

impl fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetOrigin::Source(location) => f.write_str(location),
            DatasetOrigin::Fallback => f.write_str("bundled sample dataset"),
        }
    }
}

/// Records of one load pass plus how they were obtained
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<VehicleRecord>,
    pub origin: DatasetOrigin,

    /// Fetch failure that triggered the fallback, if any
    pub load_error: Option<String>,

    pub stats: ParseStats,
}

impl LoadedDataset {
    /// Check whether there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Loads and parses the dataset from a [`TextSource`]
pub struct DatasetLoader<S> {
    source: S,
    fallback_on_error: bool,
    parser: RecordParser,
}

impl DatasetLoader<FileSource> {
    /// Loader for the configured dataset file
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(FileSource::new(config.dataset_path.clone()))
            .with_fallback(config.fallback_on_error)
    }
}

impl<S: TextSource> DatasetLoader<S> {
    /// Loader with fallback enabled
    pub fn new(source: S) -> Self {
        Self {
            source,
            fallback_on_error: true,
            parser: RecordParser::new(),
        }
    }

    /// Enable or disable the bundled fallback
    pub fn with_fallback(mut self, fallback_on_error: bool) -> Self {
        self.fallback_on_error = fallback_on_error;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and parse the dataset
    ///
    /// A fetch failure is returned only when fallback is disabled; otherwise
    /// it is logged, kept as `load_error`, and the bundled sample is parsed
    /// instead. An empty or header-only dataset is not an error.
    pub async fn load(&self) -> Result<LoadedDataset> {
        let location = self.source.location();
        let start_time = Instant::now();
        info!("Loading EV dataset from {}", location);

        let (text, origin, load_error) = match self.source.fetch_text().await {
            Ok(text) => (text, DatasetOrigin::Source(location), None),
            Err(e) if self.fallback_on_error => {
                warn!("Failed to load dataset ({}), using bundled sample data", e);
                (
                    FALLBACK_DATASET_CSV.to_string(),
                    DatasetOrigin::Fallback,
                    Some(e.to_string()),
                )
            }
            Err(e) => return Err(e),
        };

        let result = self.parser.parse_text(&text);
        debug!("Parsed dataset in {:?}", start_time.elapsed());
        info!("{} ({})", result.stats.summary(), origin);

        Ok(LoadedDataset {
            records: result.records,
            origin,
            load_error,
            stats: result.stats,
        })
    }
}

/// Parse the bundled sample dataset directly
pub fn load_fallback() -> LoadedDataset {
    let result = RecordParser::new().parse_text(FALLBACK_DATASET_CSV);
    LoadedDataset {
        records: result.records,
        origin: DatasetOrigin::Fallback,
        load_error: None,
        stats: result.stats,
    }
}
