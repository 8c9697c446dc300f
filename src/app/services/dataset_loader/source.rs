//! Raw text sources for the registration dataset

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Result};

/// Something that can produce the raw dataset text
///
/// This is the only asynchronous boundary of the analytics pipeline.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Human-readable location used in logs and error messages
    fn location(&self) -> String;

    /// Fetch the complete dataset text
    async fn fetch_text(&self) -> Result<String>;
}

/// Dataset file on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TextSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_text(&self) -> Result<String> {
        debug!("Reading dataset file: {}", self.path.display());

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::dataset_unavailable(self.location(), e.to_string()))?;

        String::from_utf8(bytes).map_err(|e| {
            Error::dataset_unavailable(self.location(), format!("not valid UTF-8: {}", e))
        })
    }
}

/// Dataset text already held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySource {
    name: String,
    text: String,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl TextSource for MemorySource {
    fn location(&self) -> String {
        self.name.clone()
    }

    async fn fetch_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
