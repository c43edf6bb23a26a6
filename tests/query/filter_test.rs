use crate::utils::{codes, record};
use anzsic_reader::{FieldEqualsFilter, Record, RecordField, filter_by_year, filter_records};

fn dataset() -> Vec<Record> {
    vec![
        record("2019", "A", "5"),
        record("2020", "B", "3"),
        record("2019", "C", "8"),
        record("2021", "D", "1"),
        record("2019", "E", "2"),
    ]
}

#[test]
fn test_filter_by_year_is_exact_subsequence() {
    let records = dataset();

    let filtered = filter_by_year(&records, "2019");
    assert_eq!(codes(&filtered), vec!["A", "C", "E"]);
    assert!(filtered.iter().all(|r| r.year() == "2019"));

    let expected: Vec<Record> = records.iter().filter(|r| r.year() == "2019").cloned().collect();
    assert_eq!(filtered, expected);
}

#[test]
fn test_filter_does_not_mutate_input() {
    let records = dataset();
    let before = records.clone();

    let _ = filter_by_year(&records, "2020");
    assert_eq!(records, before);
}

#[test]
fn test_no_match_yields_empty() {
    let records = dataset();
    assert!(filter_by_year(&records, "1999").is_empty());
    assert!(filter_by_year(&records, "2019 ").is_empty());
}

#[test]
fn test_closure_and_field_filter_agree() {
    let records = dataset();

    let by_closure = filter_records(&records, |r| r.industry_code() == "B");
    let code_filter = FieldEqualsFilter::new(RecordField::IndustryCode, "B");
    let by_field = filter_records(&records, |r| code_filter.matches(r));
    assert_eq!(by_closure, by_field);
    assert_eq!(codes(&by_field), vec!["B"]);
}
