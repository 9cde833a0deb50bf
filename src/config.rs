//! Configuration management and validation.
//!
//! Provides the ingestion configuration: tokenizer characters and limits on
//! the diagnostics retained in parse statistics. Configuration can be built in
//! code with the `with_*` builders or loaded from a TOML file.

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_MAX_RECORDED_ERRORS, DEFAULT_QUOTE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for a purchase-order ingestion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Field delimiter character
    pub delimiter: char,

    /// Quote character used for fields containing delimiters or newlines
    pub quote: char,

    /// Maximum number of skip messages kept in parse statistics
    pub max_recorded_errors: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            max_recorded_errors: DEFAULT_MAX_RECORDED_ERRORS,
        }
    }
}

impl IngestConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing keys fall back to their defaults. The loaded configuration is
    /// validated before being returned.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| {
            Error::configuration(format!("{} ({})", e, path.display()))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid TOML configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that the tokenizer characters are usable
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.quote {
            return Err(Error::configuration(format!(
                "Delimiter and quote must differ (both are {:?})",
                self.delimiter
            )));
        }

        for (name, ch) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if ch == '\n' || ch == '\r' {
                return Err(Error::configuration(format!(
                    "The {} cannot be a line terminator",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set how many skip messages are retained in statistics
    pub fn with_max_recorded_errors(mut self, max: usize) -> Self {
        self.max_recorded_errors = max;
        self
    }
}
