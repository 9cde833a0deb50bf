//! Field coercion utilities for purchase-order records
//!
//! This module converts raw tokenized fields into typed values. Text is taken
//! verbatim, numbers become arbitrary-precision decimals and the primary date
//! is validated.
//! None of these functions fail: numeric oddities coerce to zero and a bad
//! date is reported back to the row assembler as a skip reason.

use super::column_mapping::ColumnMapping;
use super::date::parse_dmy;
use super::record_parser::SkipReason;
use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

/// Plain or scientific decimal notation, with no digit grouping of any kind
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("number pattern is valid")
});

/// Get the raw value of a column, or `""` when the row is too short
pub fn get_field<'a>(record: &'a [String], mapping: &ColumnMapping, field_name: &str) -> &'a str {
    mapping
        .get_index(field_name)
        .and_then(|index| record.get(index))
        .map(String::as_str)
        .unwrap_or("")
}

/// Parse a text column, preserving the value exactly
pub fn parse_text(record: &[String], mapping: &ColumnMapping, field_name: &str) -> String {
    get_field(record, mapping, field_name).to_string()
}

/// Parse a raw string as a decimal of any magnitude
///
/// Blank input is zero. Returns `None` when the value is not written in plain
/// or scientific notation; grouping separators such as `12,000` or `1_000`
/// are rejected rather than guessed at.
pub fn parse_decimal_value(raw: &str) -> Option<BigDecimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(BigDecimal::zero());
    }

    if !NUMBER_PATTERN.is_match(trimmed) {
        return None;
    }
    BigDecimal::from_str(trimmed).ok()
}

/// Parse a numeric column
///
/// Values that cannot be parsed coerce to zero and the column name is pushed
/// onto `fallbacks` so callers can account for them.
pub fn parse_decimal(
    record: &[String],
    mapping: &ColumnMapping,
    field_name: &'static str,
    fallbacks: &mut Vec<&'static str>,
) -> BigDecimal {
    let raw = get_field(record, mapping, field_name);

    parse_decimal_value(raw).unwrap_or_else(|| {
        debug!(
            "Failed to parse numeric field '{}' = '{}'; using 0",
            field_name, raw
        );
        fallbacks.push(field_name);
        BigDecimal::zero()
    })
}

/// Parse the date column that gates row acceptance
pub fn parse_required_date(
    record: &[String],
    mapping: &ColumnMapping,
    field_name: &str,
) -> Result<NaiveDate, SkipReason> {
    let raw = get_field(record, mapping, field_name);

    parse_dmy(raw).ok_or_else(|| SkipReason::InvalidDate {
        column: field_name.to_string(),
        value: raw.to_string(),
    })
}
