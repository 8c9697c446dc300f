//! Test utilities for registration parser testing
//!
//! This module provides sample registration text in the shapes seen in the
//! wild, used across the parser test modules.

mod parser_tests;

/// Header as exported by the Washington State EV population dataset
pub const WA_EXPORT_HEADER: &str = "VIN (1-10),County,City,State,Postal Code,Model Year,Make,Model,Electric Vehicle Type,Clean Alternative Fuel Vehicle (CAFV) Eligibility,Electric Range,Base MSRP,Legislative District,DOL Vehicle ID,Vehicle Location,Electric Utility,2020 Census Tract";

/// Helper to create registration text in the Washington export shape
pub fn create_wa_export_csv() -> String {
    [
        WA_EXPORT_HEADER,
        "5YJ3E1EA7K,King,Seattle,WA,98122,2019,TESLA,MODEL 3,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,220,0,37,477309682,POINT (-122.30253 47.60221),CITY OF SEATTLE - (WA)|CITY OF TACOMA - (WA),53033007800",
        "JTDKN3DP8D,Yakima,Yakima,WA,98902,2013,TOYOTA,PRIUS PLUG-IN,Plug-in Hybrid Electric Vehicle (PHEV),Not eligible due to low battery range,6,0,14,249905295,POINT (-120.52301 46.59656),PACIFICORP,53077000904",
        "1N4AZ0CP5D,King,Kirkland,WA,98033,2013,NISSAN,LEAF,Battery Electric Vehicle (BEV),Clean Alternative Fuel Vehicle Eligible,75,0,45,100489049,POINT (-122.2066 47.67887),PUGET SOUND ENERGY INC||CITY OF TACOMA - (WA),53033022603",
    ]
    .join("\n")
}

/// Helper to create registration text in the internal camelCase schema
pub fn create_internal_schema_csv() -> String {
    r#"id,vin,county,city,state,postalCode,modelYear,make,model,evType,electricRange,baseMSRP,legislativeDistrict,dolVehicleId,vehicleLocation,electricUtility,censusTract
1,VIN001,King,Seattle,WA,98101,2023,TESLA,MODEL 3,BEV,358,46990,43,DOL001,"POINT (-122.33 47.61)",CITY OF SEATTLE - (WA),53033005200
11,VIN011,King,Seattle,WA,98103,2023,TOYOTA,PRIUS PRIME,PHEV,44,32350,46,DOL011,"POINT (-122.34 47.67)",CITY OF SEATTLE - (WA),53033001300"#
        .to_string()
}

/// Helper to create the three-column sample containing one malformed row
pub fn create_minimal_csv_with_bad_row() -> String {
    "Model Year,Make,Electric Range\n2022,TESLA,300\n2021,NISSAN,150\nbad_row\n2022,TESLA,300\n"
        .to_string()
}
