//! Chart-ready label/value series built from an aggregate summary
//!
//! Each series pairs a label vector with an equal-length value vector, ready
//! to hand to a plotting front end or print as a text chart.

use serde::Serialize;

use crate::app::services::aggregator::{AggregateSummary, RankedEntry};
use crate::constants::{chart_titles, series_labels};

/// How a series is meant to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// One titled series of labelled counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,

    /// Legend label of the dataset
    pub series_label: String,

    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

impl ChartSeries {
    fn new(
        title: &str,
        kind: ChartKind,
        series_label: &str,
        points: impl IntoIterator<Item = (String, usize)>,
    ) -> Self {
        let (labels, values) = points.into_iter().unzip();
        Self {
            title: title.to_string(),
            kind,
            series_label: series_label.to_string(),
            labels,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(label, value)` points in display order
    pub fn points(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Largest value in the series, 0 when empty
    pub fn max_value(&self) -> usize {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// Bar series of the highest-count makes
pub fn top_makes(summary: &AggregateSummary) -> ChartSeries {
    ChartSeries::new(
        chart_titles::TOP_MAKES,
        ChartKind::Bar,
        series_labels::VEHICLE_COUNT,
        ranked_points(&summary.top_makes),
    )
}

/// Line series of registrations per model year, oldest first
pub fn adoption_by_year(summary: &AggregateSummary) -> ChartSeries {
    let mut years: Vec<(u32, usize)> = summary
        .year_distribution
        .iter()
        .map(|(year, count)| (*year, count))
        .collect();
    years.sort_by_key(|(year, _)| *year);

    ChartSeries::new(
        chart_titles::ADOPTION_BY_YEAR,
        ChartKind::Line,
        series_labels::REGISTRATIONS,
        years
            .into_iter()
            .map(|(year, count)| (year.to_string(), count)),
    )
}

/// Pie series of the BEV/PHEV split in first-encounter order
pub fn ev_type_split(summary: &AggregateSummary) -> ChartSeries {
    ChartSeries::new(
        chart_titles::EV_TYPE_SPLIT,
        ChartKind::Pie,
        series_labels::EV_TYPES,
        summary
            .ev_type_distribution
            .iter()
            .map(|(ev_type, count)| (ev_type.to_string(), count)),
    )
}

/// Bar series of the highest-count counties
pub fn top_counties(summary: &AggregateSummary) -> ChartSeries {
    ChartSeries::new(
        chart_titles::TOP_COUNTIES,
        ChartKind::Bar,
        series_labels::VEHICLE_COUNT,
        ranked_points(&summary.top_counties),
    )
}

fn ranked_points(entries: &[RankedEntry<String>]) -> impl Iterator<Item = (String, usize)> + '_ {
    entries.iter().map(|entry| (entry.key.clone(), entry.count))
}

/// The four dashboard charts for one summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSet {
    pub top_makes: ChartSeries,
    pub adoption_by_year: ChartSeries,
    pub ev_type_split: ChartSeries,
    pub top_counties: ChartSeries,
}

impl ChartSet {
    pub fn from_summary(summary: &AggregateSummary) -> Self {
        Self {
            top_makes: top_makes(summary),
            adoption_by_year: adoption_by_year(summary),
            ev_type_split: ev_type_split(summary),
            top_counties: top_counties(summary),
        }
    }

    /// Charts in dashboard display order
    pub fn iter(&self) -> impl Iterator<Item = &ChartSeries> {
        [
            &self.top_makes,
            &self.adoption_by_year,
            &self.ev_type_split,
            &self.top_counties,
        ]
        .into_iter()
    }
}
