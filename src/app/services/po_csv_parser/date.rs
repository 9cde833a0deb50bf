//! Day/month/year date validation
//!
//! Vendor extracts write dates as `D[D]/M[M]/Y[Y[Y[Y]]]`. Malformed or
//! impossible dates are ordinary data, so validation reports `None` rather
//! than an error.

use crate::constants::{SHORT_YEAR_MAX_DIGITS, TWO_DIGIT_YEAR_BASE};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DMY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{1,4})$").expect("date pattern is valid")
});

/// Parse a `D/M/Y` string into a calendar date
///
/// One- and two-digit years are read as `2000 + YY`; longer years are taken
/// literally. Day `0`, month `0`, months above 12 and days past the end of
/// the month (including 29 February in common years) are rejected.
pub fn parse_dmy(text: &str) -> Option<NaiveDate> {
    let caps = DMY_PATTERN.captures(text.trim())?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = expand_year(&caps[3])?;

    if day == 0 || !(1..=12).contains(&month) {
        return None;
    }
    if day > days_in_month(year, month) {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

fn expand_year(digits: &str) -> Option<i32> {
    let year: i32 = digits.parse().ok()?;
    if digits.len() <= SHORT_YEAR_MAX_DIGITS {
        Some(TWO_DIGIT_YEAR_BASE + year)
    } else {
        Some(year)
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month, or 0 for a month outside 1..=12
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
