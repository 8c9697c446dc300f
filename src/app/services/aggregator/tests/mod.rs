//! Test utilities for aggregation testing

use crate::app::models::{EvType, VehicleRecord};

// Test modules
mod distribution_tests;

/// Helper to create a vehicle with the fields aggregation looks at
pub fn create_vehicle(
    make: &str,
    model_year: u32,
    ev_type: EvType,
    electric_range: u32,
    county: &str,
) -> VehicleRecord {
    VehicleRecord {
        id: format!("{}-{}-{}", make, model_year, county),
        make: make.to_string(),
        model_year,
        ev_type,
        electric_range,
        county: county.to_string(),
        ..Default::default()
    }
}

/// Helper to create `count` identical BEVs in one county
pub fn create_fleet(make: &str, county: &str, count: usize) -> Vec<VehicleRecord> {
    (0..count)
        .map(|_| create_vehicle(make, 2022, EvType::Bev, 200, county))
        .collect()
}
