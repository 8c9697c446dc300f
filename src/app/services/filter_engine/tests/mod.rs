//! Test utilities for filter engine testing

use crate::app::models::{EvType, VehicleRecord};


/// Helper to create a vehicle with the fields filters look at
pub fn create_vehicle(id: &str, model_year: u32, make: &str, ev_type: EvType) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        model_year,
        make: make.to_string(),
        ev_type,
        ..Default::default()
    }
}

/// A small mixed fleet across three years and four makes
pub fn create_mixed_fleet() -> Vec<VehicleRecord> {
    vec![
        create_vehicle("1", 2022, "TESLA", EvType::Bev),
        create_vehicle("2", 2021, "NISSAN", EvType::Bev),
        create_vehicle("3", 2022, "TOYOTA", EvType::Phev),
        create_vehicle("4", 2023, "TESLA", EvType::Bev),
        create_vehicle("5", 2022, "TESLA", EvType::Bev),
        create_vehicle("6", 2021, "BMW", EvType::Phev),
    ]
}

pub fn ids(records: &[VehicleRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}
