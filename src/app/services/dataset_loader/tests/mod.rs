//! Test utilities for dataset loader testing

use async_trait::async_trait;
use std::io::Write;
use tempfile::NamedTempFile;

use super::TextSource;
use crate::{Error, Result};


/// A source that always fails, standing in for an unreachable dataset
pub struct FailingSource;

#[async_trait]
impl TextSource for FailingSource {
    fn location(&self) -> String {
        "unreachable://ev-data.csv".to_string()
    }

    async fn fetch_text(&self) -> Result<String> {
        Err(Error::dataset_unavailable(self.location(), "connection refused"))
    }
}

/// Write `content` to a temporary CSV file
pub fn create_dataset_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const SMALL_DATASET: &str = "\
Model Year,Make,Electric Vehicle Type,Electric Range
2022,TESLA,Battery Electric Vehicle (BEV),300
2021,NISSAN,Battery Electric Vehicle (BEV),150
2023,TOYOTA,Plug-in Hybrid Electric Vehicle (PHEV),44
";
