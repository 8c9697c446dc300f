//! Aggregate summary computation
//!
//! This module provides the [`Aggregator`] that reduces a record sequence to
//! an [`AggregateSummary`] in a single pass.

use serde::Serialize;
use tracing::debug;

use super::distribution::{Distribution, RankedEntry, rounded_percentage};
use crate::app::models::{EvType, VehicleRecord};
use crate::config::DashboardConfig;
use crate::constants::{DEFAULT_TOP_COUNTIES, DEFAULT_TOP_MAKES, OVERVIEW_TOP_COUNTIES};

/// Derived statistics for one record sequence
///
/// Always recomputed from its input; never cached across filter changes.
/// `bev_percentage + phev_percentage` may differ from 100 because each is
/// rounded independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    /// Number of records summarized
    pub total_vehicles: usize,

    pub make_distribution: Distribution<String>,
    pub year_distribution: Distribution<u32>,
    pub ev_type_distribution: Distribution<EvType>,
    pub county_distribution: Distribution<String>,

    /// Rounded mean electric range, 0 for an empty input
    pub average_range: u32,

    /// Highest-count makes, ties in first-encounter order
    pub top_makes: Vec<RankedEntry<String>>,

    /// Highest-count counties, ties in first-encounter order
    pub top_counties: Vec<RankedEntry<String>>,

    /// Number of distinct makes
    pub unique_makes: usize,

    pub bev_count: usize,
    pub phev_count: usize,
    pub bev_percentage: u32,
    pub phev_percentage: u32,
}

impl AggregateSummary {
    /// Check whether the summary describes an empty record sequence
    pub fn is_empty(&self) -> bool {
        self.total_vehicles == 0
    }
}

/// Single-pass aggregator with configurable ranking depths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    top_makes: usize,
    top_counties: usize,
}

impl Aggregator {
    /// Create an aggregator ranking `top_makes` makes and `top_counties` counties
    pub fn new(top_makes: usize, top_counties: usize) -> Self {
        Self {
            top_makes,
            top_counties,
        }
    }

    /// Filtered dashboard variant: top 10 makes, top 5 counties
    pub fn dashboard() -> Self {
        Self::new(DEFAULT_TOP_MAKES, DEFAULT_TOP_COUNTIES)
    }

    /// All-data overview variant: top 10 makes, top 10 counties
    pub fn overview() -> Self {
        Self::new(DEFAULT_TOP_MAKES, OVERVIEW_TOP_COUNTIES)
    }

    /// Dashboard variant with ranking depths taken from configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.top_makes, config.top_counties)
    }

    /// Overview variant with ranking depths taken from configuration
    pub fn overview_from_config(config: &DashboardConfig) -> Self {
        Self::new(config.top_makes, config.overview_top_counties)
    }

    /// Summarize a record sequence
    pub fn summarize<'a, I>(&self, records: I) -> AggregateSummary
    where
        I: IntoIterator<Item = &'a VehicleRecord>,
    {
        let mut make_distribution = Distribution::new();
        let mut year_distribution = Distribution::new();
        let mut ev_type_distribution = Distribution::new();
        let mut county_distribution = Distribution::new();
        let mut total_vehicles = 0usize;
        let mut range_sum = 0u64;

        for record in records {
            total_vehicles += 1;
            range_sum += u64::from(record.electric_range);
            make_distribution.increment(&record.make);
            year_distribution.increment(&record.model_year);
            ev_type_distribution.increment(&record.ev_type);
            county_distribution.increment(&record.county);
        }

        let average_range = if total_vehicles == 0 {
            0
        } else {
            (range_sum as f64 / total_vehicles as f64).round() as u32
        };

        let bev_count = ev_type_distribution.get(&EvType::Bev);
        let phev_count = ev_type_distribution.get(&EvType::Phev);

        debug!(
            "Summarized {} vehicles: {} makes, {} years, {} counties",
            total_vehicles,
            make_distribution.len(),
            year_distribution.len(),
            county_distribution.len()
        );

        AggregateSummary {
            total_vehicles,
            top_makes: make_distribution.top_n(self.top_makes),
            top_counties: county_distribution.top_n(self.top_counties),
            unique_makes: make_distribution.len(),
            average_range,
            bev_count,
            phev_count,
            bev_percentage: rounded_percentage(bev_count, total_vehicles),
            phev_percentage: rounded_percentage(phev_count, total_vehicles),
            make_distribution,
            year_distribution,
            ev_type_distribution,
            county_distribution,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::dashboard()
    }
}
