use crate::utils::{codes, record};
use anzsic_reader::error::AnzsicReaderError;
use anzsic_reader::{Record, RowErrorPolicy, SortKey, SortOutcome, sort_by_name, sort_records};

fn full_record(fields: [&str; 7]) -> Record {
    let [year, code, name, size, variable, value, unit] = fields;
    Record::new(year, code, name, size, variable, value, unit)
}

#[test]
fn test_each_text_key_sorts_ordinally() {
    let records = vec![
        full_record(["2012", "C", "Mining", "b_1-5", "Salaries", "3", "DOLLARS"]),
        full_record(["2010", "a", "Agriculture", "a_0", "Activity unit", "1", "COUNT"]),
        full_record(["2011", "B", "Zoo", "c_6-9", "Employees", "2", "ANNUAL"]),
    ];

    for key in SortKey::all() {
        if key == SortKey::Value {
            continue;
        }
        let sorted = sort_records(&records, key, RowErrorPolicy::Skip).unwrap();
        let field_values: Vec<&str> = sorted.iter().map(|r| r.get(key.field())).collect();
        let mut expected = field_values.clone();
        expected.sort_unstable();
        assert_eq!(field_values, expected, "key {key} should sort ascending");
    }

    let by_code = sort_records(&records, SortKey::IndustryCode, RowErrorPolicy::Skip).unwrap();
    assert_eq!(codes(&by_code), vec!["B", "C", "a"]);
}

#[test]
fn test_value_sort_is_numeric_not_textual() {
    let records = vec![record("2019", "A", "100"), record("2019", "B", "20"), record("2019", "C", "3.5")];

    let sorted = sort_records(&records, SortKey::Value, RowErrorPolicy::Skip).unwrap();
    assert_eq!(codes(&sorted), vec!["C", "B", "A"]);
}

#[test]
fn test_equal_years_keep_original_order() {
    let records = vec![
        record("2020", "A", "1"),
        record("2019", "B", "2"),
        record("2020", "C", "3"),
        record("2019", "D", "4"),
        record("2020", "E", "5"),
    ];

    let sorted = sort_records(&records, SortKey::Year, RowErrorPolicy::Skip).unwrap();
    assert_eq!(codes(&sorted), vec!["B", "D", "A", "C", "E"]);
}

#[test]
fn test_unknown_key_returns_input_unchanged() {
    let records = vec![record("2020", "A", "5"), record("2019", "B", "3")];

    let outcome = sort_by_name(&records, "bogus", RowErrorPolicy::Skip).unwrap();
    let SortOutcome::Unchanged { records: kept, reason } = outcome else {
        panic!("unknown key must not sort");
    };
    assert_eq!(kept, records);
    assert!(reason.contains("Invalid sort key 'bogus'"));
}

#[test]
fn test_key_names_are_case_insensitive() {
    let records = vec![record("2020", "A", "5"), record("2019", "B", "3")];

    for name in ["YEAR", "Year", "year", "IndustryCodeANZSIC", "VALUE"] {
        let outcome = sort_by_name(&records, name, RowErrorPolicy::Skip).unwrap();
        assert!(matches!(outcome, SortOutcome::Sorted(_)), "{name} should be recognized");
    }
}

#[test]
fn test_strict_value_sort_rejects_non_numeric() {
    let records = vec![record("2019", "A", "5"), record("2019", "B", "C")];

    assert!(matches!(
        sort_by_name(&records, "value", RowErrorPolicy::Fail),
        Err(AnzsicReaderError::InvalidValue { position: 1, .. })
    ));
}

#[test]
fn test_end_to_end_pair() {
    let records = vec![record("2019", "A", "5"), record("2020", "B", "3")];

    let filtered = anzsic_reader::filter_by_year(&records, "2019");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].year(), "2019");

    let sorted = sort_records(&records, SortKey::Value, RowErrorPolicy::Skip).unwrap();
    let values: Vec<&str> = sorted.iter().map(Record::value).collect();
    assert_eq!(values, vec!["3", "5"]);
}
