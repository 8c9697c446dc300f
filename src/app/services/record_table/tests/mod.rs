//! Test utilities for record table testing

use crate::app::models::{EvType, VehicleRecord};

// Test modules
mod pagination_tests;

/// Helper to create a vehicle with the columns the table sorts on
pub fn create_row(id: &str, model_year: u32, make: &str, city: &str, range: u32) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        model_year,
        make: make.to_string(),
        city: city.to_string(),
        electric_range: range,
        ev_type: EvType::Bev,
        ..Default::default()
    }
}

/// `count` rows with ids "1".."count"
pub fn create_numbered_rows(count: usize) -> Vec<VehicleRecord> {
    (1..=count)
        .map(|i| create_row(&i.to_string(), 2020, "TESLA", "Seattle", 200))
        .collect()
}

pub fn ids(records: &[VehicleRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}
