use csv_profile::core::sniff::{looks_like_array, looks_like_object};
use csv_profile::core::truthiness::truthiness_str;
use csv_profile::{
    classify, is_header_row, profile_row, scan, CsvRowSource, Kind, RawValue, ScanOptions,
    Truthiness,
};
use std::collections::BTreeMap;

#[test]
fn test_integer_literals_and_their_truthiness() {
    for n in -25i64..=25 {
        let ta = classify(&n.to_string()).unwrap();
        assert_eq!(ta.value_type, Kind::Int);
        assert_eq!(ta.is_truthy, n == 0 || n == 1, "{}", n);
    }
}

#[test]
fn test_float_literals_and_their_truthiness() {
    for (raw, recognized) in [
        ("0.0", true),
        ("1.0", true),
        ("1.00", true),
        ("0.1", false),
        ("2.0", false),
        ("-1.5e3", false),
        ("6.02e23", false),
    ] {
        let ta = classify(raw).unwrap();
        assert_eq!(ta.value_type, Kind::Float, "{}", raw);
        assert_eq!(ta.is_truthy, recognized, "{}", raw);
    }
}

#[test]
fn test_string_truthiness_rules() {
    assert_eq!(truthiness_str("TrUe"), Truthiness::recognized(true));
    assert_eq!(truthiness_str("NONE"), Truthiness::recognized(false));
    assert_eq!(truthiness_str("TRUEISH!!"), Truthiness::UNRECOGNIZED);
    assert_eq!(truthiness_str("true      "), Truthiness::UNRECOGNIZED);
}

#[test]
fn test_shallow_sniffing() {
    assert!(looks_like_array("  [1,2,3]  "));
    assert!(!looks_like_array("{a:1}"));
    assert!(!looks_like_object(""));
    assert!(!looks_like_array(""));
}

#[test]
fn test_header_detection_examples() {
    let labelled = vec![
        vec!["id".to_string(), "name".to_string(), "age".to_string()],
        vec!["1".to_string(), "Ann".to_string(), "30".to_string()],
    ];
    assert!(is_header_row(&labelled, 5).unwrap());

    let data = vec![
        vec!["1".to_string(), "Ann".to_string(), "30".to_string()],
        vec!["2".to_string(), "Bob".to_string(), "31".to_string()],
    ];
    assert!(!is_header_row(&data, 5).unwrap());
}

#[test]
fn test_profile_tally_sums_to_width() {
    let row = ["", "nil", "3", "3.5", "[x]", "{y}", "hello world, this is long"];
    let (tally, profile) = profile_row(&row).unwrap();

    assert_eq!(tally.total(), row.len());
    assert_eq!(profile.len(), row.len());
    assert_eq!(tally.string, 5);
}

#[test]
fn test_scan_over_csv_text() {
    let data = "1,a,2.5,x,t\n2,b,3.5,y,f\n3,c,4.5,z,t\n4,d,5.5\n";
    let source = CsvRowSource::from_reader(data.as_bytes(), b',');

    let outcome = scan(source, &ScanOptions::default()).unwrap();

    assert_eq!(outcome.total_line_count, 4);
    assert_eq!(outcome.columns_counts, BTreeMap::from([(5, 3)]));
    assert!(!outcome.first_row_are_labels);
    assert_eq!(outcome.column_type_details[0].value_type, Kind::Int);
}

#[test]
fn test_scan_keeps_quoted_delimiters_after_leading_blank() {
    let data = "id,name,note\n1, \"Smith, Ann\",x\n2, \"Doe, Bob\",y\n";
    let source = CsvRowSource::from_reader(data.as_bytes(), b',');

    let outcome = scan(source, &ScanOptions::default()).unwrap();

    assert_eq!(outcome.total_line_count, 3);
    assert_eq!(outcome.columns_counts, BTreeMap::from([(3, 3)]));
    assert!(outcome.first_row_are_labels);
    assert_eq!(outcome.column_type_details[1].value_type, Kind::String);
}

#[test]
fn test_quoted_leading_space_keeps_number_as_string() {
    let data = "a,b\n\" 5\",6\n";
    let source = CsvRowSource::from_reader(data.as_bytes(), b',');

    let outcome = scan(source, &ScanOptions::default()).unwrap();

    assert_eq!(outcome.column_type_details[0].value, RawValue::from(" 5"));
    assert_eq!(outcome.column_type_details[0].value_type, Kind::String);
    assert_eq!(outcome.column_type_details[1].value_type, Kind::Int);
}

#[test]
fn test_reclassifying_converted_numbers_keeps_kind() {
    for raw in ["17", "-4", "0.25", "1e10", "12345678901234567890", "-0"] {
        let first = classify(raw).unwrap();
        let second = classify(&first.converted_value.render()).unwrap();
        assert_eq!(first.value_type, second.value_type, "{}", raw);
        assert_eq!(first, classify(raw).unwrap());
    }
}
