//! Core purchase-order parser implementation
//!
//! This module provides the parser orchestration: tokenizing the extract,
//! resolving the header and assembling each data row in order.

use std::sync::Arc;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::identity::{Clock, IdGenerator, SystemClock, UuidGenerator};
use super::record_parser::{RowOutcome, parse_order_record};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::Tokenizer;
use crate::Result;
use crate::config::IngestConfig;

/// Parser for vendor purchase-order CSV extracts
///
/// Parsing is synchronous and keeps no state between calls:
/// - A missing required column fails the whole extract
/// - A row with an invalid date is dropped and counted
/// - Every other field value is accepted as data
#[derive(Debug, Clone)]
pub struct PoCsvParser {
    config: IngestConfig,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for PoCsvParser {
    fn default() -> Self {
        Self::with_config(IngestConfig::default())
    }
}

impl PoCsvParser {
    /// Create a parser with explicit clock and identifier sources
    pub fn new(config: IngestConfig, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { config, clock, ids }
    }

    /// Create a parser using the system clock and time-ordered UUIDs
    pub fn with_config(config: IngestConfig) -> Self {
        Self::new(config, Arc::new(SystemClock), Arc::new(UuidGenerator))
    }

    /// Parse a complete extract and return purchase orders with statistics
    ///
    /// Empty input and header-only input both produce no orders. The clock is
    /// read once, so every order from one call shares its `uploaded_at`.
    pub fn parse_str(&self, text: &str) -> Result<ParseResult> {
        let tokenizer = Tokenizer::new(self.config.delimiter, self.config.quote);
        let mut rows = tokenizer.tokenize(text).into_iter();

        let Some(header) = rows.next() else {
            debug!("Extract is empty; nothing to parse");
            return Ok(ParseResult::empty());
        };

        let mapping = ColumnMapping::resolve(&header)?;
        debug!(
            "Resolved {} header columns ({} beyond the required set)",
            mapping.column_count,
            mapping.extra_column_count()
        );

        let uploaded_at = self.clock.now();
        let mut stats = ParseStats::new();
        let mut orders = Vec::with_capacity(rows.len());

        for (offset, record) in rows.enumerate() {
            stats.total_records += 1;
            // 1-based, counting the header as row 1
            let row_number = offset + 2;

            match parse_order_record(&record, &mapping, self.ids.as_ref(), uploaded_at) {
                RowOutcome::Accepted {
                    order,
                    numeric_fallbacks,
                } => {
                    stats.numeric_fallbacks += numeric_fallbacks.len();
                    orders.push(*order);
                    stats.orders_parsed += 1;
                }
                RowOutcome::Skipped(reason) => {
                    stats.records_skipped += 1;
                    debug!("Skipped row {}: {}", row_number, reason);
                    stats.record_error(
                        format!("Row {}: {}", row_number, reason),
                        self.config.max_recorded_errors,
                    );
                }
            }
        }

        info!(
            "Parsed {} purchase orders from {} rows ({} skipped)",
            stats.orders_parsed, stats.total_records, stats.records_skipped
        );

        Ok(ParseResult { orders, stats })
    }
}
