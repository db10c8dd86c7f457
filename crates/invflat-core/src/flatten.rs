//! The invoice flattener.
//!
//! Maps nested invoice/line-item records into a flat, typed row set with
//! computed totals, percentages, and an expiration flag. Pure given its
//! two inputs: nothing is read, written, or mutated outside the returned
//! table.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use invflat_model::{
    FlatRow, FlatTable, Invoice, InvoiceLine, ItemType, NumericTyping, Result,
};

use crate::datetime::parse_created_on;
use crate::quantity::normalize_quantity;

/// A line item after quantity normalization, with its derived values.
///
/// Built as a copy so the input line is never rewritten; totals are
/// computed from this view, not from the source data.
#[derive(Debug, Clone)]
struct NormalizedLine {
    item_id: Option<i64>,
    item_name: Option<String>,
    item_type: Option<ItemType>,
    unit_price: Option<f64>,
    total_price: Option<f64>,
}

impl NormalizedLine {
    fn from_line(line: &InvoiceLine) -> Self {
        let quantity = normalize_quantity(&line.quantity);
        let unit_price = line.item.unit_price;
        let total_price = match (unit_price, quantity.as_count()) {
            (Some(price), Some(count)) => Some(price * count),
            _ => None,
        };
        Self {
            item_id: line.item.id,
            item_name: line.item.name.clone(),
            item_type: line.item.type_code.as_ref().and_then(ItemType::from_code),
            unit_price,
            total_price,
        }
    }
}

/// Flatten a collection of invoices into the output table.
///
/// One row per line item; exactly one synthetic row for an invoice with
/// no items. Rows are grouped by invoice id and ordered by item id
/// ascending, missing ids last.
///
/// # Errors
///
/// An invoice id that fails integer parsing after marker removal aborts
/// the whole run; no partial table is produced.
pub fn flatten_invoices(
    invoices: &[Invoice],
    expired_ids: &BTreeSet<String>,
) -> Result<FlatTable> {
    let mut rows = Vec::new();
    for invoice in invoices {
        let invoice_id = invoice.id.normalize()?;
        let created_on = parse_created_on(&invoice.created_on);
        // Membership uses the marker-stripped string form, so ids with
        // leading zeros match the expired file as written.
        let is_expired = expired_ids.contains(invoice.id.stripped().as_str());

        let lines: Vec<NormalizedLine> = invoice
            .lines()
            .iter()
            .map(NormalizedLine::from_line)
            .collect();

        if lines.is_empty() {
            rows.push(FlatRow::empty(invoice_id, created_on, is_expired));
            continue;
        }

        // A line whose own total is undefined contributes zero to the
        // invoice total; remaining percentages use this reduced sum.
        let invoice_total: f64 = lines.iter().filter_map(|line| line.total_price).sum();

        for line in &lines {
            let percentage_in_invoice = match line.total_price {
                Some(total) if invoice_total != 0.0 => Some(total / invoice_total),
                _ => None,
            };
            rows.push(FlatRow {
                invoice_id,
                created_on,
                invoiceitem_id: line.item_id,
                invoiceitem_name: line.item_name.clone(),
                item_type: line.item_type,
                unit_price: line.unit_price,
                total_price: line.total_price,
                percentage_in_invoice,
                is_expired,
            });
        }
    }

    force_null_item_fields(&mut rows);
    let numeric_typing = decide_numeric_typing(&rows);
    sort_rows(&mut rows);

    debug!(
        invoice_count = invoices.len(),
        row_count = rows.len(),
        loose_typing = matches!(numeric_typing, NumericTyping::Loose),
        "flatten complete"
    );

    Ok(FlatTable {
        rows,
        numeric_typing,
    })
}

/// Item name and type must not survive without an item id.
fn force_null_item_fields(rows: &mut [FlatRow]) {
    for row in rows.iter_mut().filter(|row| row.invoiceitem_id.is_none()) {
        row.invoiceitem_name = None;
        row.item_type = None;
    }
}

/// `Loose` iff the item-id column is entirely null (including the empty
/// table), so an all-missing column is never forced numeric.
fn decide_numeric_typing(rows: &[FlatRow]) -> NumericTyping {
    if rows.iter().all(|row| row.invoiceitem_id.is_none()) {
        NumericTyping::Loose
    } else {
        NumericTyping::Strict
    }
}

fn sort_rows(rows: &mut [FlatRow]) {
    rows.sort_by(|a, b| {
        a.invoice_id
            .cmp(&b.invoice_id)
            .then_with(|| cmp_item_ids(a.invoiceitem_id, b.invoiceitem_id))
    });
}

/// Ascending item id, missing ids last.
fn cmp_item_ids(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_ordering_puts_missing_last() {
        assert_eq!(cmp_item_ids(Some(1), Some(2)), Ordering::Less);
        assert_eq!(cmp_item_ids(Some(1), None), Ordering::Less);
        assert_eq!(cmp_item_ids(None, Some(1)), Ordering::Greater);
        assert_eq!(cmp_item_ids(None, None), Ordering::Equal);
    }

    #[test]
    fn empty_input_yields_loose_empty_table() {
        let table = flatten_invoices(&[], &BTreeSet::new()).unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.numeric_typing, NumericTyping::Loose);
    }
}
