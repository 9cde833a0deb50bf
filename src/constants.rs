//! Application constants for the purchase-order ingestion pipeline
//!
//! This module contains the fixed column vocabulary of the vendor extract,
//! tokenizer defaults and the date expansion policy used throughout the crate.

// =============================================================================
// Column Names
// =============================================================================

/// Header names as they appear in the vendor CSV extract
pub mod columns {
    pub const DATE: &str = "Date";
    pub const SUPPLIER: &str = "Supplier";
    pub const ORDER_NO: &str = "Order No";
    pub const REF_NO: &str = "Ref No";
    pub const DUE_DATE: &str = "Due Date";
    pub const BRANCH: &str = "Branch";
    pub const REQUISITION_TYPE: &str = "Requisition Type";
    pub const ITEM_LEDGER_GROUP: &str = "Item/Ledger Group";
    pub const ITEM: &str = "Item";
    pub const MIN_QTY: &str = "Min Qty";
    pub const MAX_QTY: &str = "Max Qty";
    pub const UNIT: &str = "Unit";
    pub const RATE: &str = "Rate";
    pub const DELIVERY_DATE: &str = "Delivery Date";
    pub const CGST: &str = "CGST";
    pub const SGST: &str = "SGST";
    pub const IGST: &str = "IGST";
    pub const VAT: &str = "VAT";
    pub const LAST_APPROVED_RATE: &str = "Last Approved Rate";
    pub const LAST_SUPPLIER: &str = "Last Supplier";
    pub const BROKER: &str = "Broker";
    pub const TOTAL_AMOUNT: &str = "Total Amount";
    pub const STATUS: &str = "Status";
    pub const DELIVERY_TYPE: &str = "Delivery Type";
    pub const OPEN_PO: &str = "Open PO";
    pub const OPEN_PO_NO: &str = "Open PO No";
}

/// Every column that must be present in the header row, in canonical order
pub const REQUIRED_COLUMNS: &[&str] = &[
    columns::DATE,
    columns::SUPPLIER,
    columns::ORDER_NO,
    columns::REF_NO,
    columns::DUE_DATE,
    columns::BRANCH,
    columns::REQUISITION_TYPE,
    columns::ITEM_LEDGER_GROUP,
    columns::ITEM,
    columns::MIN_QTY,
    columns::MAX_QTY,
    columns::UNIT,
    columns::RATE,
    columns::DELIVERY_DATE,
    columns::CGST,
    columns::SGST,
    columns::IGST,
    columns::VAT,
    columns::LAST_APPROVED_RATE,
    columns::LAST_SUPPLIER,
    columns::BROKER,
    columns::TOTAL_AMOUNT,
    columns::STATUS,
    columns::DELIVERY_TYPE,
    columns::OPEN_PO,
    columns::OPEN_PO_NO,
];

// =============================================================================
// Tokenizer Defaults
// =============================================================================

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Default quote character
pub const DEFAULT_QUOTE: char = '"';

/// Byte-order mark stripped from the start of input
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Default cap on per-row skip messages retained in parse statistics
pub const DEFAULT_MAX_RECORDED_ERRORS: usize = 100;

// =============================================================================
// Date Policy
// =============================================================================

/// Century added to one- and two-digit years (`24` becomes `2024`)
pub const TWO_DIGIT_YEAR_BASE: i32 = 2000;

/// Years written with this many digits or fewer are expanded with
/// [`TWO_DIGIT_YEAR_BASE`]
pub const SHORT_YEAR_MAX_DIGITS: usize = 2;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing target used by the binary's env filter
pub const LOG_TARGET: &str = "po_ingest";
