//! Data models for purchase-order ingestion
//!
//! This module contains the record produced by the ingestion pipeline. Records are
//! built once per parse call and are never mutated by the pipeline afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Purchase Order Record
// =============================================================================

/// A validated purchase order line taken from a vendor extract
///
/// Text columns are carried verbatim (possibly empty, never absent) and numeric
/// columns are arbitrary-precision decimals. Only `date` is validated as a calendar date;
/// `due_date` and `delivery_date` are kept as the vendor wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    /// Identifier unique within a single parse call
    pub id: String,

    /// Order date, always a valid calendar date
    pub date: NaiveDate,

    pub supplier: String,
    pub order_no: String,
    pub ref_no: String,

    /// Due date as written in the extract (not validated)
    pub due_date: String,

    pub branch: String,
    pub requisition_type: String,
    pub item_ledger_group: String,
    pub item: String,

    pub min_qty: BigDecimal,
    pub max_qty: BigDecimal,
    pub unit: String,
    pub rate: BigDecimal,

    /// Delivery date as written in the extract (not validated)
    pub delivery_date: String,

    pub cgst: BigDecimal,
    pub sgst: BigDecimal,
    pub igst: BigDecimal,
    pub vat: BigDecimal,
    pub last_approved_rate: BigDecimal,
    pub last_supplier: String,
    pub broker: String,
    pub total_amount: BigDecimal,
    pub status: String,
    pub delivery_type: String,

    #[serde(rename = "openPO")]
    pub open_po: String,

    #[serde(rename = "openPONo")]
    pub open_po_no: String,

    /// Approval state, always `false` when produced by the parser
    pub is_approved: bool,

    /// Ingestion time taken from the parser's clock
    pub uploaded_at: DateTime<Utc>,
}

impl PurchaseOrder {
    /// Sum of the four tax columns
    pub fn total_tax(&self) -> BigDecimal {
        &self.cgst + &self.sgst + &self.igst + &self.vat
    }
}
