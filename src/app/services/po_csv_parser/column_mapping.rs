//! Header resolution for purchase-order extracts
//!
//! This module maps header names to column positions and checks that every
//! required column is present. Columns are located by name, so vendors may
//! order them freely and add columns of their own.

use crate::constants::REQUIRED_COLUMNS;
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::warn;

/// Column mapping resolved from the header row
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Number of columns in the header row
    pub column_count: usize,
}

impl ColumnMapping {
    /// Build the mapping from a header row and verify the required columns
    ///
    /// Names must match exactly. When a name repeats, the first occurrence wins.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let mut name_to_index = HashMap::with_capacity(headers.len());

        for (index, header) in headers.iter().enumerate() {
            if name_to_index.contains_key(header.as_str()) {
                warn!(
                    "Duplicate column '{}' at position {}; using the first occurrence",
                    header, index
                );
                continue;
            }
            name_to_index.insert(header.clone(), index);
        }

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !name_to_index.contains_key(**column))
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::missing_columns(missing));
        }

        Ok(ColumnMapping {
            name_to_index,
            column_count: headers.len(),
        })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Number of header columns that are not part of the required set
    pub fn extra_column_count(&self) -> usize {
        self.name_to_index.len() - REQUIRED_COLUMNS.len()
    }
}
