use std::str::FromStr;

use datashape::sort::*;
use serde_json::{json, Value};

#[derive(Clone, Debug, PartialEq)]
struct Entry {
    id: u32,
    at: Option<&'static str>,
}

fn entry(id: u32, at: Option<&'static str>) -> Entry {
    Entry { id, at }
}

fn ids(entries: &[Entry]) -> Vec<u32> {
    entries.iter().map(|e| e.id).collect()
}

#[test]
fn test_sort_ascending() {
    let mut records = vec![
        entry(3, Some("2024-01-03")),
        entry(1, Some("2024-01-01")),
        entry(2, Some("2024-01-02")),
    ];

    sort_by_date(&mut records, |e| e.at, SortOrder::Ascending, None);
    assert_eq!(ids(&records), vec![1, 2, 3]);
}

#[test]
fn test_sort_descending() {
    let mut records = vec![
        entry(3, Some("2024-01-03")),
        entry(1, Some("2024-01-01")),
        entry(2, Some("2024-01-02")),
    ];

    sort_by_date(&mut records, |e| e.at, SortOrder::Descending, None);
    assert_eq!(ids(&records), vec![3, 2, 1]);
}

#[test]
fn test_sort_default_order_is_descending() {
    let mut records = vec![entry(1, Some("2024-01-01")), entry(2, Some("2024-01-02"))];

    sort_by_date(&mut records, |e| e.at, SortOrder::default(), None);
    assert_eq!(ids(&records), vec![2, 1]);
}

#[test]
fn test_sort_is_idempotent() {
    let mut records = vec![
        entry(2, Some("2024-01-02")),
        entry(1, Some("2024-01-01")),
        entry(3, Some("2024-01-03")),
    ];

    sort_by_date(&mut records, |e| e.at, SortOrder::Ascending, None);
    let first_pass = records.clone();
    sort_by_date(&mut records, |e| e.at, SortOrder::Ascending, None);
    assert_eq!(records, first_pass);
}

#[test]
fn test_sort_equal_dates_keep_original_order() {
    let mut records = vec![
        entry(1, Some("2024-06-01")),
        entry(2, Some("2024-06-01")),
        entry(3, Some("2024-05-01")),
        entry(4, Some("2024-06-01")),
    ];

    sort_by_date(&mut records, |e| e.at, SortOrder::Ascending, None);
    assert_eq!(ids(&records), vec![3, 1, 2, 4]);

    sort_by_date(&mut records, |e| e.at, SortOrder::Descending, None);
    assert_eq!(ids(&records), vec![1, 2, 4, 3]);
}

#[test]
fn test_sort_uses_time_of_day() {
    let mut records = vec![
        entry(2, Some("2024-01-01T18:00:00")),
        entry(1, Some("2024-01-01T06:00:00")),
    ];

    sort_by_date(&mut records, |e| e.at, SortOrder::Ascending, None);
    assert_eq!(ids(&records), vec![1, 2]);
}

#[test]
fn test_sort_missing_dates_go_to_the_edge() {
    let mut records = vec![
        entry(1, Some("2024-01-02")),
        entry(2, None),
        entry(3, Some("2024-01-01")),
        entry(4, Some("garbage")),
    ];

    sort_by_date(&mut records, |e| e.at, SortOrder::Ascending, None);
    // undated records first ascending, in their original relative order
    assert_eq!(ids(&records), vec![2, 4, 3, 1]);

    sort_by_date(&mut records, |e| e.at, SortOrder::Descending, None);
    // and last descending
    assert_eq!(ids(&records), vec![1, 3, 2, 4]);
}

#[test]
fn test_sort_with_explicit_format() {
    let mut records = vec![entry(2, Some("02/01/2024")), entry(1, Some("01/01/2024"))];

    sort_by_date(&mut records, |e| e.at, SortOrder::Ascending, Some("%d/%m/%Y"));
    assert_eq!(ids(&records), vec![1, 2]);
}

#[test]
fn test_sort_json_records() {
    let mut records = vec![
        json!({"id": 2, "date": "2024-03-02"}),
        json!({"id": 1, "date": "2024-03-01"}),
    ];

    sort_by_date(
        &mut records,
        |r: &Value| r.get("date").and_then(Value::as_str),
        SortOrder::Ascending,
        None,
    );

    assert_eq!(records[0]["id"], json!(1));
    assert_eq!(records[1]["id"], json!(2));
}

#[test]
fn test_sort_order_from_str() {
    assert_eq!(SortOrder::from_str("asc").unwrap(), SortOrder::Ascending);
    assert_eq!(SortOrder::from_str("desc").unwrap(), SortOrder::Descending);
    assert!(SortOrder::from_str("sideways").is_err());
}

#[test]
fn test_sort_order_display() {
    assert_eq!(SortOrder::Ascending.to_string(), "asc");
    assert_eq!(SortOrder::Descending.to_string(), "desc");
}

#[test]
fn test_sort_order_serde_round_trip() {
    assert_eq!(serde_json::to_string(&SortOrder::Ascending).unwrap(), "\"asc\"");
    let parsed: SortOrder = serde_json::from_str("\"desc\"").unwrap();
    assert_eq!(parsed, SortOrder::Descending);
}
