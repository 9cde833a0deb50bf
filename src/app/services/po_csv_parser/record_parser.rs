//! Individual row assembly for purchase-order extracts
//!
//! This module turns one tokenized data row into either a complete
//! [`PurchaseOrder`] or a skip decision. Skipping is an ordinary outcome, not
//! an error: a row with an unusable date is left out while the rest of the
//! extract is still ingested.

use chrono::{DateTime, Utc};
use std::fmt;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{parse_decimal, parse_required_date, parse_text};
use super::identity::IdGenerator;
use crate::app::models::PurchaseOrder;
use crate::constants::columns;

/// Why a data row was left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The gating date column is not a valid `D/M/Y` calendar date
    InvalidDate { column: String, value: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidDate { column, value } => {
                write!(f, "invalid date in column '{}': '{}'", column, value)
            }
        }
    }
}

/// Outcome of assembling a single data row
#[derive(Debug, Clone)]
pub enum RowOutcome {
    /// The row produced a record
    Accepted {
        order: Box<PurchaseOrder>,
        /// Numeric columns that could not be parsed and were set to zero
        numeric_fallbacks: Vec<&'static str>,
    },
    /// The row was dropped
    Skipped(SkipReason),
}

/// Assemble a purchase order from one data row
///
/// The date is checked first so identifiers are only drawn for rows that are
/// kept.
pub fn parse_order_record(
    record: &[String],
    mapping: &ColumnMapping,
    ids: &dyn IdGenerator,
    uploaded_at: DateTime<Utc>,
) -> RowOutcome {
    let date = match parse_required_date(record, mapping, columns::DATE) {
        Ok(date) => date,
        Err(reason) => return RowOutcome::Skipped(reason),
    };

    let mut fallbacks = Vec::new();
    let mut number = |name: &'static str| parse_decimal(record, mapping, name, &mut fallbacks);

    let min_qty = number(columns::MIN_QTY);
    let max_qty = number(columns::MAX_QTY);
    let rate = number(columns::RATE);
    let cgst = number(columns::CGST);
    let sgst = number(columns::SGST);
    let igst = number(columns::IGST);
    let vat = number(columns::VAT);
    let last_approved_rate = number(columns::LAST_APPROVED_RATE);
    let total_amount = number(columns::TOTAL_AMOUNT);

    let text = |name: &str| parse_text(record, mapping, name);

    let order = PurchaseOrder {
        id: ids.next_id(),
        date,
        supplier: text(columns::SUPPLIER),
        order_no: text(columns::ORDER_NO),
        ref_no: text(columns::REF_NO),
        due_date: text(columns::DUE_DATE),
        branch: text(columns::BRANCH),
        requisition_type: text(columns::REQUISITION_TYPE),
        item_ledger_group: text(columns::ITEM_LEDGER_GROUP),
        item: text(columns::ITEM),
        min_qty,
        max_qty,
        unit: text(columns::UNIT),
        rate,
        delivery_date: text(columns::DELIVERY_DATE),
        cgst,
        sgst,
        igst,
        vat,
        last_approved_rate,
        last_supplier: text(columns::LAST_SUPPLIER),
        broker: text(columns::BROKER),
        total_amount,
        status: text(columns::STATUS),
        delivery_type: text(columns::DELIVERY_TYPE),
        open_po: text(columns::OPEN_PO),
        open_po_no: text(columns::OPEN_PO_NO),
        is_approved: false,
        uploaded_at,
    };

    RowOutcome::Accepted {
        order: Box::new(order),
        numeric_fallbacks: fallbacks,
    }
}
