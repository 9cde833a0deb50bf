//! Parsing statistics and result structures for purchase-order extracts
//!
//! This module provides types for tracking how many data rows were seen,
//! accepted and skipped, alongside the accepted records themselves.

use crate::app::models::PurchaseOrder;

/// Parsing result with purchase orders and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Accepted records, in input row order
    pub orders: Vec<PurchaseOrder>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Result for input that contains no header row at all
    pub fn empty() -> Self {
        Self {
            orders: Vec::new(),
            stats: ParseStats::new(),
        }
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered (header excluded)
    pub total_records: usize,

    /// Number of purchase orders produced
    pub orders_parsed: usize,

    /// Number of rows dropped because of an invalid date
    pub records_skipped: usize,

    /// Number of numeric fields that could not be parsed and were set to zero
    pub numeric_fallbacks: usize,

    /// Skip messages for debugging, capped by configuration
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            orders_parsed: 0,
            records_skipped: 0,
            numeric_fallbacks: 0,
            errors: Vec::new(),
        }
    }

    /// Record a diagnostic message unless `limit` messages are already kept
    pub fn record_error(&mut self, message: String, limit: usize) {
        if self.errors.len() < limit {
            self.errors.push(message);
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.orders_parsed as f64 / self.total_records as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
