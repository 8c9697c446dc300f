//! Tests for the full parse pass

use super::super::parse;
use super::super::parser::RecordParser;
use super::{create_internal_schema_csv, create_minimal_csv_with_bad_row, create_wa_export_csv};
use crate::app::models::EvType;

#[test]
fn test_parse_skips_malformed_row() {
    let result = RecordParser::new().parse_text(&create_minimal_csv_with_bad_row());

    assert_eq!(result.records.len(), 3);
    assert_eq!(result.stats.total_lines, 4);
    assert_eq!(result.stats.records_parsed, 3);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert!(result.stats.errors[0].contains("Line 3"));

    let makes: Vec<&str> = result.records.iter().map(|r| r.make.as_str()).collect();
    assert_eq!(makes, vec!["TESLA", "NISSAN", "TESLA"]);
}

#[test]
fn test_parse_strips_byte_order_mark() {
    let records = parse("\u{feff}VIN (1-10),Model Year,Make\n5YJ3E1EA1K,2022,TESLA\n");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].vin, "5YJ3E1EA1K");
    assert_eq!(records[0].id, "5YJ3E1EA1K");
    assert_eq!(records[0].model_year, 2022);
}

#[test]
fn test_synthetic_ids_use_input_line_index() {
    let records = parse(&create_minimal_csv_with_bad_row());
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();

    // Line 3 is the malformed row, so ids skip from record_2 to record_4
    assert_eq!(ids, vec!["record_1", "record_2", "record_4"]);
}

#[test]
fn test_parse_wa_export() {
    let records = parse(&create_wa_export_csv());

    assert_eq!(records.len(), 3);

    let tesla = &records[0];
    assert_eq!(tesla.id, "5YJ3E1EA7K");
    assert_eq!(tesla.vin, "5YJ3E1EA7K");
    assert_eq!(tesla.county, "King");
    assert_eq!(tesla.postal_code, "98122");
    assert_eq!(tesla.model_year, 2019);
    assert_eq!(tesla.model, "MODEL 3");
    assert_eq!(tesla.ev_type, EvType::Bev);
    assert_eq!(tesla.electric_range, 220);
    assert_eq!(tesla.legislative_district, "37");
    assert_eq!(tesla.dol_vehicle_id, "477309682");
    assert_eq!(tesla.vehicle_location, "POINT (-122.30253 47.60221)");
    assert_eq!(
        tesla.electric_utility,
        "CITY OF SEATTLE - (WA)|CITY OF TACOMA - (WA)"
    );
    assert_eq!(tesla.census_tract, "53033007800");

    assert_eq!(records[1].ev_type, EvType::Phev);
    assert_eq!(records[1].make, "TOYOTA");
    assert_eq!(records[2].ev_type, EvType::Bev);
}

#[test]
fn test_parse_internal_schema() {
    let records = parse(&create_internal_schema_csv());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].base_msrp, 46990.0);
    assert_eq!(records[0].vehicle_location, "POINT (-122.33 47.61)");
    assert_eq!(records[1].id, "11");
    assert_eq!(records[1].ev_type, EvType::Phev);
    assert_eq!(records[1].electric_range, 44);
}

#[test]
fn test_header_alias_invariance() {
    let variants = [
        "Model Year,Make,Electric Range\n2022,TESLA,300\n2021,NISSAN,150\n",
        "modelYear,make,electricRange\n2022,TESLA,300\n2021,NISSAN,150\n",
        "  MODEL   YEAR ,\"MAKE\",Range\n2022,TESLA,300\n2021,NISSAN,150\n",
        "year,make,electric range\n2022,TESLA,300\n2021,NISSAN,150\n",
        "Make,Electric Range,Model Year\nTESLA,300,2022\nNISSAN,150,2021\n",
    ];

    let baseline = parse(variants[0]);
    assert_eq!(baseline.len(), 2);

    for variant in &variants[1..] {
        assert_eq!(parse(variant), baseline, "variant differs: {:?}", variant);
    }
}

#[test]
fn test_ev_type_literal_substring_rule() {
    let text = "Make,Electric Vehicle Type\n\
                A,Plug-in Hybrid\n\
                B,PHEV\n\
                C,Clean Alternative Fuel Vehicle Eligible PHEV\n\
                D,Battery Electric Vehicle (BEV)\n\
                E,\n";
    let records = parse(text);

    let types: Vec<EvType> = records.iter().map(|r| r.ev_type).collect();
    assert_eq!(
        types,
        vec![EvType::Bev, EvType::Phev, EvType::Phev, EvType::Bev, EvType::Bev]
    );
}

#[test]
fn test_id_column_blank_falls_back_to_vin() {
    let text = "ID,VIN,Make\n,VIN9,FORD\n,,KIA\n7,VIN7,AUDI\n";
    let ids: Vec<String> = parse(text).into_iter().map(|r| r.id).collect();

    assert_eq!(ids, vec!["VIN9", "record_2", "7"]);
}

#[test]
fn test_parse_empty_and_blank_input() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n  \n").is_empty());

    let result = RecordParser::new().parse_text("Make,Model\n");
    assert!(result.records.is_empty());
    assert_eq!(result.stats.total_lines, 0);
}

#[test]
fn test_leading_blank_lines_and_crlf() {
    let text = "\r\n\r\nMake,Model Year\r\nTESLA,2022\r\n\r\nNISSAN,2021\r\n";
    let records = parse(text);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].make, "TESLA");
    assert_eq!(records[0].model_year, 2022);
    // Header sits at line 2, so the first data row is line 3
    assert_eq!(records[0].id, "record_3");
    assert_eq!(records[1].id, "record_5");
}

#[test]
fn test_extra_fields_are_tolerated() {
    let records = parse("Make,Model Year\nTESLA,2022,surplus,columns\n");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].model_year, 2022);
}

#[test]
fn test_missing_fields_reported() {
    let result = RecordParser::new().parse_text("Make,Model Year\nTESLA,2022\n");

    assert!(result.stats.missing_fields.contains(&"vin".to_string()));
    assert!(result.stats.missing_fields.contains(&"ev_type".to_string()));
    assert!(!result.stats.missing_fields.contains(&"make".to_string()));
    assert_eq!(result.stats.missing_fields.len(), 15);
}
