//! CSV parser for vendor purchase-order extracts
//!
//! This module turns the raw text of a vendor extract into validated
//! [`PurchaseOrder`](crate::app::models::PurchaseOrder) records in one linear
//! pass.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`tokenizer`] - Quote-aware splitting of text into rows and fields
//! - [`column_mapping`] - Header resolution and required column checks
//! - [`date`] - `D/M/Y` calendar date validation
//! - [`field_parsers`] - Per-column coercion to text, decimals and dates
//! - [`record_parser`] - Row assembly and the row-skip decision
//! - [`identity`] - Injected clock and identifier sources
//! - [`parser`] - Orchestration of the stages above
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use po_ingest::{FixedClock, IngestConfig, PoCsvParser, SequentialIdGenerator};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
//! let parser = PoCsvParser::new(
//!     IngestConfig::default(),
//!     Arc::new(clock),
//!     Arc::new(SequentialIdGenerator::default()),
//! );
//!
//! let result = parser.parse_str("").unwrap();
//! assert!(result.orders.is_empty());
//! assert_eq!(result.stats.total_records, 0);
//! ```

pub mod column_mapping;
pub mod date;
pub mod field_parsers;
pub mod identity;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::PoCsvParser;
pub use record_parser::{RowOutcome, SkipReason};
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::Tokenizer;
