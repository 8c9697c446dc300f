//! Tests for insertion-ordered distributions and top-N ranking

use super::super::distribution::{Distribution, RankedEntry, rounded_percentage};

fn keys(values: &[&str]) -> Distribution<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_distribution_counts() {
    let distribution = keys(&["TESLA", "NISSAN", "TESLA", "KIA"]);

    assert_eq!(distribution.get(&"TESLA".to_string()), 2);
    assert_eq!(distribution.get(&"NISSAN".to_string()), 1);
    assert_eq!(distribution.get(&"FORD".to_string()), 0);
    assert_eq!(distribution.len(), 3);
    assert_eq!(distribution.total(), 4);
    assert!(!distribution.is_empty());
}

#[test]
fn test_distribution_iterates_in_first_encounter_order() {
    let distribution = keys(&["KIA", "TESLA", "KIA", "AUDI", "TESLA", "TESLA"]);

    let entries: Vec<(&String, usize)> = distribution.iter().collect();
    assert_eq!(entries[0], (&"KIA".to_string(), 2));
    assert_eq!(entries[1], (&"TESLA".to_string(), 3));
    assert_eq!(entries[2], (&"AUDI".to_string(), 1));

    let names: Vec<&String> = distribution.keys().collect();
    assert_eq!(names, vec!["KIA", "TESLA", "AUDI"]);
}

#[test]
fn test_top_n_orders_by_count_descending() {
    let distribution = keys(&["A", "B", "B", "C", "C", "C"]);
    let top = distribution.top_n(2);

    assert_eq!(
        top,
        vec![
            RankedEntry {
                key: "C".to_string(),
                count: 3
            },
            RankedEntry {
                key: "B".to_string(),
                count: 2
            },
        ]
    );
}

#[test]
fn test_top_n_ties_keep_first_encounter_order() {
    let distribution = keys(&["D", "A", "B", "A", "C", "B", "D", "E"]);
    let top: Vec<String> = distribution.top_n(5).into_iter().map(|e| e.key).collect();

    // D, A and B all have 2; C and E have 1
    assert_eq!(top, vec!["D", "A", "B", "C", "E"]);
}

#[test]
fn test_top_n_larger_than_distribution() {
    let distribution = keys(&["A", "B"]);

    assert_eq!(distribution.top_n(10).len(), 2);
    assert!(distribution.top_n(0).is_empty());
    assert!(Distribution::<String>::new().top_n(5).is_empty());
}

#[test]
fn test_distribution_share() {
    let distribution = keys(&["A", "A", "B"]);

    assert_eq!(distribution.share(&"A".to_string()), 67);
    assert_eq!(distribution.share(&"B".to_string()), 33);
    assert_eq!(distribution.share(&"Z".to_string()), 0);
    assert_eq!(Distribution::<String>::new().share(&"A".to_string()), 0);
}

#[test]
fn test_rounded_percentage() {
    assert_eq!(rounded_percentage(0, 0), 0);
    assert_eq!(rounded_percentage(5, 0), 0);
    assert_eq!(rounded_percentage(1, 8), 13); // 12.5 rounds up
    assert_eq!(rounded_percentage(7, 8), 88); // 87.5 rounds up
    assert_eq!(rounded_percentage(1, 3), 33);
    assert_eq!(rounded_percentage(4, 4), 100);
}

#[test]
fn test_distribution_equality_depends_on_encounter_order() {
    assert_eq!(keys(&["A", "B", "A"]), keys(&["A", "A", "B"]));
    assert_ne!(keys(&["A", "B"]), keys(&["B", "A"]));
}

#[test]
fn test_distribution_serializes_as_ordered_object() {
    let distribution: Distribution<u32> = [2023u32, 2021, 2023].into_iter().collect();
    let json = serde_json::to_string(&distribution).unwrap();

    assert_eq!(json, r#"{"2023":2,"2021":1}"#);
}
