//! Test utilities for purchase-order parser testing
//!
//! This module provides helpers for building extracts and deterministic
//! parsers, shared by the test modules below.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use crate::app::services::po_csv_parser::PoCsvParser;
use crate::app::services::po_csv_parser::identity::{FixedClock, SequentialIdGenerator};
use crate::config::IngestConfig;
use crate::constants::{REQUIRED_COLUMNS, columns};

// Test modules
mod column_mapping_tests;
mod stats_tests;

/// Instant returned by the test clock
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
}

/// Parser with a fixed clock and `po-N` identifiers
pub fn deterministic_parser() -> PoCsvParser {
    PoCsvParser::new(
        IngestConfig::default(),
        Arc::new(FixedClock::new(test_instant())),
        Arc::new(SequentialIdGenerator::default()),
    )
}

/// Header line with every required column in canonical order
pub fn header_line() -> String {
    REQUIRED_COLUMNS.join(",")
}

/// Default raw value for a column in generated rows
pub fn default_value(column: &str) -> &'static str {
    match column {
        columns::DATE => "15/01/2024",
        columns::SUPPLIER => "Acme Supplies",
        columns::ORDER_NO => "PO-1001",
        columns::REF_NO => "REF-77",
        columns::DUE_DATE => "30/01/2024",
        columns::BRANCH => "Pune",
        columns::REQUISITION_TYPE => "Regular",
        columns::ITEM_LEDGER_GROUP => "Raw Material",
        columns::ITEM => "Steel Rod",
        columns::MIN_QTY => "5",
        columns::MAX_QTY => "50",
        columns::UNIT => "KG",
        columns::RATE => "120.50",
        columns::DELIVERY_DATE => "05/02/2024",
        columns::CGST => "9",
        columns::SGST => "9",
        columns::IGST => "0",
        columns::VAT => "0",
        columns::LAST_APPROVED_RATE => "118.00",
        columns::LAST_SUPPLIER => "Beta Metals",
        columns::BROKER => "Direct",
        columns::TOTAL_AMOUNT => "6025.00",
        columns::STATUS => "Pending",
        columns::DELIVERY_TYPE => "Door Delivery",
        columns::OPEN_PO => "No",
        columns::OPEN_PO_NO => "",
        _ => "",
    }
}

/// Quote a value when it contains characters that need it
pub fn quote_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Data line in canonical column order, with selected columns overridden
pub fn data_row(overrides: &[(&str, &str)]) -> String {
    REQUIRED_COLUMNS
        .iter()
        .map(|column| {
            let value = overrides
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| *value)
                .unwrap_or_else(|| default_value(column));
            quote_field(value)
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Complete extract: header plus the given data lines, `\n` separated
pub fn build_csv(rows: &[String]) -> String {
    let mut lines = vec![header_line()];
    lines.extend(rows.iter().cloned());
    lines.join("\n")
}

/// Header as an owned row, as the tokenizer would produce it
pub fn header_fields() -> Vec<String> {
    REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
}
