//! Dataset loading for the dashboard
//!
//! Fetches the raw registration text through a [`TextSource`] and parses it.
//! When the source can't be read the loader degrades to the bundled sample
//! dataset and reports the failure alongside the records, so the dashboard
//! still has something to show.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ev_dashboard::app::services::dataset_loader::{DatasetLoader, FileSource};
//!
//! # async fn run() -> ev_dashboard::Result<()> {
//! let loaded = DatasetLoader::new(FileSource::new("ev-data.csv")).load().await?;
//! if let Some(error) = &loaded.load_error {
//!     eprintln!("Showing sample data: {}", error);
//! }
//! println!("{} vehicles from {}", loaded.len(), loaded.origin);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::{DatasetLoader, DatasetOrigin, LoadedDataset, load_fallback};
pub use source::{FileSource, MemorySource, TextSource};
