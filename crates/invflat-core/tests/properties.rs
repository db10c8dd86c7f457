//! Property tests for the invoice flattener's aggregate laws.

use std::collections::BTreeSet;

use proptest::prelude::*;

use invflat_core::flatten_invoices;
use invflat_model::{CatalogItem, Invoice, InvoiceLine, Quantity, RawInvoiceId, TypeCode};

fn arb_quantity() -> impl Strategy<Value = Quantity> {
    prop_oneof![
        (1.0f64..20.0).prop_map(Quantity::Count),
        Just(Quantity::Text("ten".to_string())),
        Just(Quantity::Text("five".to_string())),
        Just(Quantity::Text("many".to_string())),
    ]
}

fn arb_catalog_item() -> impl Strategy<Value = CatalogItem> {
    (
        proptest::option::of(0i64..50),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of(prop_oneof![
            (0i64..6).prop_map(TypeCode::Code),
            Just(TypeCode::Legacy("O".to_string())),
        ]),
        proptest::option::of(0.5f64..100.0),
    )
        .prop_map(|(id, name, type_code, unit_price)| CatalogItem {
            id,
            name,
            type_code,
            unit_price,
        })
}

fn arb_line() -> impl Strategy<Value = InvoiceLine> {
    (arb_quantity(), arb_catalog_item())
        .prop_map(|(quantity, item)| InvoiceLine { quantity, item })
}

fn arb_invoices() -> impl Strategy<Value = Vec<Invoice>> {
    proptest::collection::btree_set(1i64..1000, 0..6).prop_flat_map(|ids| {
        ids.into_iter()
            .map(|id| {
                (
                    proptest::option::of(proptest::collection::vec(arb_line(), 0..5)),
                    proptest::bool::ANY,
                )
                    .prop_map(move |(items, bad_date)| Invoice {
                        id: RawInvoiceId::Number(id),
                        created_on: if bad_date {
                            "not a date".to_string()
                        } else {
                            "2023-01-01".to_string()
                        },
                        items,
                    })
            })
            .collect::<Vec<_>>()
    })
}

fn arb_input() -> impl Strategy<Value = (Vec<Invoice>, BTreeSet<String>)> {
    arb_invoices().prop_flat_map(|invoices| {
        let ids: Vec<String> = invoices.iter().map(|inv| inv.id.stripped()).collect();
        let subset = proptest::collection::vec(proptest::bool::ANY, ids.len()).prop_map(
            move |mask| {
                ids.iter()
                    .zip(mask)
                    .filter(|(_, expired)| *expired)
                    .map(|(id, _)| id.clone())
                    .collect::<BTreeSet<String>>()
            },
        );
        (Just(invoices), subset)
    })
}

proptest! {
    #[test]
    fn row_count_is_max_of_one_and_item_count(invoices in arb_invoices()) {
        let table = flatten_invoices(&invoices, &BTreeSet::new()).unwrap();
        for invoice in &invoices {
            let id = invoice.id.normalize().unwrap();
            let rows = table.rows.iter().filter(|row| row.invoice_id == id).count();
            prop_assert_eq!(rows, invoice.lines().len().max(1));
        }
    }

    #[test]
    fn missing_item_id_implies_missing_name_and_type(invoices in arb_invoices()) {
        let table = flatten_invoices(&invoices, &BTreeSet::new()).unwrap();
        for row in &table.rows {
            if row.invoiceitem_id.is_none() {
                prop_assert!(row.invoiceitem_name.is_none());
                prop_assert!(row.item_type.is_none());
            }
        }
    }

    #[test]
    fn non_null_percentages_sum_to_one_per_invoice(invoices in arb_invoices()) {
        let table = flatten_invoices(&invoices, &BTreeSet::new()).unwrap();
        for invoice in &invoices {
            let id = invoice.id.normalize().unwrap();
            let percentages: Vec<f64> = table
                .rows
                .iter()
                .filter(|row| row.invoice_id == id)
                .filter_map(|row| row.percentage_in_invoice)
                .collect();
            if !percentages.is_empty() {
                let sum: f64 = percentages.iter().sum();
                prop_assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
            }
        }
    }

    #[test]
    fn output_is_sorted_by_invoice_then_item(invoices in arb_invoices()) {
        let table = flatten_invoices(&invoices, &BTreeSet::new()).unwrap();
        for pair in table.rows.windows(2) {
            prop_assert!(pair[0].invoice_id <= pair[1].invoice_id);
            if pair[0].invoice_id == pair[1].invoice_id {
                match (pair[0].invoiceitem_id, pair[1].invoiceitem_id) {
                    (Some(left), Some(right)) => prop_assert!(left <= right),
                    // Missing ids sort last within an invoice.
                    (None, Some(_)) => prop_assert!(false, "missing id before present id"),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn expiry_matches_set_membership_exactly((invoices, expired) in arb_input()) {
        let table = flatten_invoices(&invoices, &expired).unwrap();
        for invoice in &invoices {
            let id = invoice.id.normalize().unwrap();
            let expected = expired.contains(invoice.id.stripped().as_str());
            for row in table.rows.iter().filter(|row| row.invoice_id == id) {
                prop_assert_eq!(row.is_expired, expected);
            }
        }
    }

    #[test]
    fn total_price_requires_both_operands(invoices in arb_invoices()) {
        let table = flatten_invoices(&invoices, &BTreeSet::new()).unwrap();
        for row in &table.rows {
            if row.total_price.is_some() {
                prop_assert!(row.unit_price.is_some());
            }
            if row.percentage_in_invoice.is_some() {
                prop_assert!(row.total_price.is_some());
            }
        }
    }
}
