//! Tests for header resolution

use super::header_fields;
use crate::Error;
use crate::app::services::po_csv_parser::ColumnMapping;
use crate::constants::{REQUIRED_COLUMNS, columns};

#[test]
fn test_resolves_canonical_header() {
    let mapping = ColumnMapping::resolve(&header_fields()).unwrap();

    assert_eq!(mapping.column_count, REQUIRED_COLUMNS.len());
    assert_eq!(mapping.get_index(columns::DATE), Some(0));
    assert_eq!(mapping.get_index(columns::OPEN_PO_NO), Some(REQUIRED_COLUMNS.len() - 1));
    assert_eq!(mapping.extra_column_count(), 0);
}

#[test]
fn test_resolves_by_name_not_position() {
    let mut headers = header_fields();
    headers.reverse();
    headers.insert(3, "Vendor Notes".to_string());

    let mapping = ColumnMapping::resolve(&headers).unwrap();

    assert_eq!(mapping.get_index(columns::OPEN_PO_NO), Some(0));
    assert_eq!(mapping.get_index(columns::DATE), Some(headers.len() - 1));
    assert_eq!(mapping.get_index("Vendor Notes"), Some(3));
    assert_eq!(mapping.extra_column_count(), 1);
}

#[test]
fn test_missing_columns_error() {
    let headers: Vec<String> = header_fields()
        .into_iter()
        .filter(|h| h != columns::VAT && h != columns::BROKER)
        .collect();

    let err = ColumnMapping::resolve(&headers).unwrap_err();
    let message = err.to_string();

    assert!(err.is_structural());
    assert!(message.contains("Missing required columns"));
    assert!(message.contains("VAT"));
    assert!(message.contains("Broker"));
    assert!(message.contains("Required columns are"));

    match err {
        Error::MissingColumns { missing, required } => {
            assert_eq!(missing, vec!["VAT".to_string(), "Broker".to_string()]);
            assert_eq!(required.len(), REQUIRED_COLUMNS.len());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_header_match_is_exact() {
    let headers: Vec<String> = header_fields()
        .into_iter()
        .map(|h| if h == columns::RATE { " rate ".to_string() } else { h })
        .collect();

    let err = ColumnMapping::resolve(&headers).unwrap_err();
    assert!(err.to_string().contains("Missing required columns: Rate."));
}

#[test]
fn test_empty_header_lists_everything() {
    let err = ColumnMapping::resolve(&[String::new()]).unwrap_err();
    match err {
        Error::MissingColumns { missing, .. } => assert_eq!(missing.len(), REQUIRED_COLUMNS.len()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_duplicate_column_first_wins() {
    let mut headers = header_fields();
    headers.push(columns::SUPPLIER.to_string());

    let mapping = ColumnMapping::resolve(&headers).unwrap();
    assert_eq!(mapping.get_index(columns::SUPPLIER), Some(1));
}
