//! Purchase-Order Ingestion Library
//!
//! A Rust library for turning untrusted, vendor-supplied CSV extracts into
//! validated, strongly-typed purchase order records.
//!
//! This library provides tools for:
//! - Tokenizing CSV text with quoted fields, doubled-quote escaping, embedded
//!   newlines, byte-order marks and mixed line endings
//! - Resolving header columns by name and rejecting extracts with missing columns
//! - Validating `D/M/Y` dates against the proleptic Gregorian calendar
//! - Coercing numeric columns into exact decimals
//! - Skipping rows with unusable dates without failing the whole extract
//!
//! ```rust
//! let csv = "Date,Supplier\n01/02/2024,ACME";
//! let err = po_ingest::parse(csv).unwrap_err();
//! assert!(err.to_string().contains("Missing required columns"));
//!
//! assert!(po_ingest::parse_date("29/02/2024").is_some());
//! assert!(po_ingest::parse_date("29/02/2023").is_none());
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod po_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

use chrono::NaiveDate;

// Re-export commonly used types
pub use app::models::PurchaseOrder;
pub use app::services::po_csv_parser::identity::{
    Clock, FixedClock, IdGenerator, SequentialIdGenerator, SystemClock, UuidGenerator,
};
pub use app::services::po_csv_parser::{ParseResult, ParseStats, PoCsvParser};
pub use config::IngestConfig;

/// Result type alias for the ingestion pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for purchase-order ingestion
///
/// Only [`Error::MissingColumns`] is produced by the parsing pipeline itself.
/// Row-level defects never surface here; they are recorded in [`ParseStats`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The header row lacks one or more required columns
    #[error(
        "Missing required columns: {}. Required columns are: {}",
        .missing.join(", "),
        .required.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        required: Vec<String>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a missing columns error
    pub fn missing_columns(missing: Vec<String>) -> Self {
        Self::MissingColumns {
            missing,
            required: constants::REQUIRED_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error describes a structural defect in the extract
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MissingColumns { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

/// Parse a complete CSV extract into purchase orders
///
/// Uses the default configuration, time-ordered UUID identifiers and the
/// system clock. Fails only when the header lacks required columns; rows with an
/// invalid date are dropped.
pub fn parse(text: &str) -> Result<Vec<PurchaseOrder>> {
    PoCsvParser::default()
        .parse_str(text)
        .map(|result| result.orders)
}

/// Parse a `D/M/Y` date string, returning `None` when it is not a real calendar date
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    app::services::po_csv_parser::date::parse_dmy(text)
}
