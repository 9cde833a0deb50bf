//! Tests for parsing statistics functionality

use super::super::stats::{ParseResult, ParseStats};

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_records: 100,
        orders_parsed: 95,
        records_skipped: 5,
        numeric_fallbacks: 0,
        errors: vec!["Row 2: bad".to_string(), "Row 9: bad".to_string()],
    };

    assert_eq!(stats.success_rate(), 95.0);

    let poor_stats = ParseStats {
        total_records: 100,
        orders_parsed: 80,
        records_skipped: 20,
        numeric_fallbacks: 4,
        errors: vec![],
    };

    assert_eq!(poor_stats.success_rate(), 80.0);
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_records, 0);
    assert_eq!(empty_stats.orders_parsed, 0);
    assert_eq!(empty_stats.records_skipped, 0);
    assert!(empty_stats.errors.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert_eq!(empty_stats, ParseStats::default());
}

#[test]
fn test_record_error_respects_limit() {
    let mut stats = ParseStats::new();
    for i in 0..5 {
        stats.record_error(format!("Row {}", i), 2);
    }

    assert_eq!(stats.errors, vec!["Row 0".to_string(), "Row 1".to_string()]);
}

#[test]
fn test_empty_result() {
    let result = ParseResult::empty();
    assert!(result.orders.is_empty());
    assert_eq!(result.stats.total_records, 0);
}

#[test]
fn test_stats_serialize() {
    let stats = ParseStats {
        total_records: 3,
        orders_parsed: 2,
        records_skipped: 1,
        numeric_fallbacks: 0,
        errors: vec!["Row 3: invalid date".to_string()],
    };

    let json = serde_json::to_string(&stats).unwrap();
    let back: ParseStats = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stats);
}
