//! Dashboard session state
//!
//! Holds one loaded dataset, the filter menu choices derived from it, the
//! current filter selections, and the filtered view. Every selection change
//! recomputes the view and its summary eagerly, so readers never observe a
//! summary that lags behind the records it describes.

use tracing::debug;

use crate::Result;
use crate::app::models::{EvType, VehicleRecord};
use crate::app::services::aggregator::{AggregateSummary, Aggregator};
use crate::app::services::chart_series::ChartSet;
use crate::app::services::dataset_loader::{DatasetOrigin, LoadedDataset};
use crate::app::services::filter_engine::{FilterCriteria, FilterOptions, apply_filters};
use crate::app::services::record_table::{TablePage, TableState, table_page};
use crate::config::DashboardConfig;

/// Filtered records and their summary, always computed together
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub records: Vec<VehicleRecord>,
    pub summary: AggregateSummary,
}

/// One dashboard session over an immutable dataset
#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<VehicleRecord>,
    origin: DatasetOrigin,
    load_error: Option<String>,
    options: FilterOptions,
    criteria: FilterCriteria,
    view: DashboardView,
    aggregator: Aggregator,
    overview_aggregator: Aggregator,
    page_size: usize,
}

impl Dashboard {
    /// Start a session with no filters applied
    pub fn new(loaded: LoadedDataset, config: &DashboardConfig) -> Self {
        let aggregator = Aggregator::from_config(config);
        let options = FilterOptions::from_records(&loaded.records);
        let view = DashboardView {
            summary: aggregator.summarize(&loaded.records),
            records: loaded.records.clone(),
        };

        Self {
            records: loaded.records,
            origin: loaded.origin,
            load_error: loaded.load_error,
            options,
            criteria: FilterCriteria::default(),
            view,
            aggregator,
            overview_aggregator: Aggregator::overview_from_config(config),
            page_size: config.page_size,
        }
    }

    /// Every loaded record, unfiltered
    pub fn all_records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn origin(&self) -> &DatasetOrigin {
        &self.origin
    }

    /// Fetch failure reported by the loader, if the fallback is in use
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Check whether the dataset itself is empty (the "no data" state)
    pub fn has_no_data(&self) -> bool {
        self.records.is_empty()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn summary(&self) -> &AggregateSummary {
        &self.view.summary
    }

    /// Summary of the whole dataset with the overview ranking depth
    pub fn overview(&self) -> AggregateSummary {
        self.overview_aggregator.summarize(&self.records)
    }

    /// Chart series for the current view
    pub fn charts(&self) -> ChartSet {
        ChartSet::from_summary(&self.view.summary)
    }

    /// Select a model year; the empty string clears it
    pub fn set_year(&mut self, year: impl Into<String>) {
        self.criteria.year = Some(year.into());
        self.refresh();
    }

    /// Select a make; the empty string clears it
    pub fn set_make(&mut self, make: impl Into<String>) {
        self.criteria.make = Some(make.into());
        self.refresh();
    }

    /// Select an EV type, or clear it with `None`
    pub fn set_ev_type(&mut self, ev_type: Option<EvType>) {
        self.criteria.ev_type = ev_type.map(|t| t.as_str().to_string());
        self.refresh();
    }

    /// Replace every selection at once
    pub fn apply(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refresh();
    }

    /// Clear all selections
    pub fn reset(&mut self) {
        self.criteria.reset();
        self.refresh();
    }

    /// Sorted page of the current view at the configured page size
    pub fn table(&self, state: &TableState, page: usize) -> Result<TablePage> {
        self.table_with_page_size(state, page, self.page_size)
    }

    /// Sorted page of the current view at an explicit page size
    pub fn table_with_page_size(
        &self,
        state: &TableState,
        page: usize,
        page_size: usize,
    ) -> Result<TablePage> {
        table_page(&self.view.records, state, page, page_size)
    }

    fn refresh(&mut self) {
        let records = apply_filters(&self.records, &self.criteria);
        let summary = self.aggregator.summarize(&records);
        debug!(
            "View refreshed ({}): {} of {} vehicles",
            self.criteria.describe(),
            summary.total_vehicles,
            self.records.len()
        );
        self.view = DashboardView { records, summary };
    }
}
