use indexmap::IndexMap;
use serde_json::{Value, json};

use dashkit::core::{DataTable, pivot_series};
use dashkit::error::RenderError;

fn harvest_table() -> DataTable {
    DataTable::new(
        vec!["year".to_owned(), "wheat".to_owned(), "corn".to_owned()],
        vec![
            vec![json!(2011), json!(10.4), json!(14.2)],
            vec![json!(2012), json!(8.2), json!(12.4)],
        ],
    )
    .expect("well-formed table")
}

#[test]
fn documented_example_pivots_to_lettered_record() {
    let table = DataTable::new(
        vec!["year".to_owned(), "wheat".to_owned(), "corn".to_owned()],
        vec![vec![json!(2011), json!(10.4), json!(14.2)]],
    )
    .expect("well-formed table");

    let pivoted = pivot_series(&table, "year", &["wheat", "corn"]).expect("pivot");

    assert_eq!(pivoted.series_keys(), ["a", "b"]);
    assert_eq!(pivoted.records().len(), 1);

    let record = &pivoted.records()[0];
    assert_eq!(record.get("x").map(String::as_str), Some("2011"));
    assert_eq!(record.get("a").map(String::as_str), Some("10.4"));
    assert_eq!(record.get("b").map(String::as_str), Some("14.2"));
}

#[test]
fn record_keys_preserve_declaration_order() {
    let table = harvest_table();
    let pivoted = pivot_series(&table, "year", &["corn", "wheat"]).expect("pivot");

    let keys: Vec<&String> = pivoted.records()[0].keys().collect();
    assert_eq!(keys, ["x", "a", "b"]);
    // First y-column declared gets `a`, regardless of header order.
    assert_eq!(
        pivoted.records()[0].get("a").map(String::as_str),
        Some("14.2")
    );
}

#[test]
fn one_identifier_per_y_column_and_labels_match_keys() {
    let table = harvest_table();
    let pivoted = pivot_series(&table, "year", &["wheat", "corn"]).expect("pivot");

    assert_eq!(pivoted.series_keys().len(), 2);
    assert_eq!(pivoted.series_keys(), pivoted.series_labels());
}

#[test]
fn unknown_y_column_is_rejected_before_output() {
    let table = harvest_table();
    let result = pivot_series(&table, "year", &["wheat", "barley"]);
    assert!(matches!(
        result,
        Err(RenderError::UnknownColumn { name }) if name == "barley"
    ));
}

#[test]
fn unknown_x_column_is_rejected() {
    let table = harvest_table();
    let result = pivot_series(&table, "month", &["wheat"]);
    assert!(matches!(
        result,
        Err(RenderError::UnknownColumn { name }) if name == "month"
    ));
}

#[test]
fn string_cells_pass_through_unquoted() {
    let table = DataTable::new(
        vec!["label".to_owned(), "value".to_owned()],
        vec![vec![json!("Q1 2011"), json!(3)]],
    )
    .expect("well-formed table");

    let pivoted = pivot_series(&table, "label", &["value"]).expect("pivot");
    assert_eq!(
        pivoted.records()[0].get("x").map(String::as_str),
        Some("Q1 2011")
    );
}

#[test]
fn ragged_rows_are_rejected_at_construction() {
    let result = DataTable::new(
        vec!["year".to_owned(), "wheat".to_owned()],
        vec![vec![json!(2011)]],
    );
    assert!(matches!(result, Err(RenderError::InvalidConfig(_))));
}

#[test]
fn from_records_uses_first_record_as_header() {
    let mut first: IndexMap<String, Value> = IndexMap::new();
    first.insert("year".to_owned(), json!(2011));
    first.insert("wheat".to_owned(), json!(10.4));
    let mut second: IndexMap<String, Value> = IndexMap::new();
    second.insert("year".to_owned(), json!(2012));
    second.insert("wheat".to_owned(), json!(8.2));

    let table = DataTable::from_records(&[first, second]).expect("records table");
    assert_eq!(table.columns(), ["year", "wheat"]);
    assert_eq!(table.rows().len(), 2);
}

#[test]
fn from_records_rejects_missing_fields() {
    let mut first: IndexMap<String, Value> = IndexMap::new();
    first.insert("year".to_owned(), json!(2011));
    first.insert("wheat".to_owned(), json!(10.4));
    let mut second: IndexMap<String, Value> = IndexMap::new();
    second.insert("year".to_owned(), json!(2012));

    let result = DataTable::from_records(&[first, second]);
    assert!(matches!(
        result,
        Err(RenderError::UnknownColumn { name }) if name == "wheat"
    ));
}

#[test]
fn empty_record_list_yields_empty_table() {
    let table = DataTable::from_records(&[]).expect("empty table");
    assert!(table.columns().is_empty());
    assert!(table.rows().is_empty());
}
