//! Flattened output rows and the table that carries them.

use chrono::NaiveDateTime;

use crate::item_type::ItemType;

/// One output row: a line item, or the single synthetic row of an
/// invoice with no items. Item-level fields are `None` on synthetic
/// rows and wherever the source lacked the value.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    pub invoice_id: i64,
    /// `None` is the missing-timestamp sentinel.
    pub created_on: Option<NaiveDateTime>,
    pub invoiceitem_id: Option<i64>,
    pub invoiceitem_name: Option<String>,
    pub item_type: Option<ItemType>,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
    pub percentage_in_invoice: Option<f64>,
    pub is_expired: bool,
}

impl FlatRow {
    /// A synthetic row for an invoice with no line items.
    pub fn empty(invoice_id: i64, created_on: Option<NaiveDateTime>, is_expired: bool) -> Self {
        Self {
            invoice_id,
            created_on,
            invoiceitem_id: None,
            invoiceitem_name: None,
            item_type: None,
            unit_price: None,
            total_price: None,
            percentage_in_invoice: None,
            is_expired,
        }
    }
}

/// Whole-table representation choice for the numeric item columns.
///
/// Decided once per table: `Loose` when the item-id column is entirely
/// null, so an all-missing column is not forced into a numeric shape.
/// Consumed only at serialization time; the in-memory rows are uniformly
/// nullable either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericTyping {
    #[default]
    Strict,
    Loose,
}

/// The flattened invoice-item table: sorted rows plus the column typing
/// decision. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatTable {
    pub rows: Vec<FlatRow>,
    pub numeric_typing: NumericTyping,
}

impl FlatTable {
    /// Output column names in their fixed serialization order.
    pub const COLUMNS: [&'static str; 9] = [
        "invoice_id",
        "created_on",
        "invoiceitem_id",
        "invoiceitem_name",
        "type",
        "unit_price",
        "total_price",
        "percentage_in_invoice",
        "is_expired",
    ];

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }
}
