//! Flattening pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the invoice blob and the expired-id list
//! 2. **Transform**: flatten invoices into the output table
//! 3. **Output**: write the CSV artifact
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use invflat_core::flatten_invoices;
use invflat_ingest::{load_expired_ids, load_invoices};
use invflat_model::{FlatTable, Invoice};
use invflat_report::write_csv;

use crate::types::InvoiceSummary;

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub invoices: Vec<Invoice>,
    pub expired_ids: BTreeSet<String>,
}

/// Read both input collaborators.
pub fn ingest(data_file: &Path, expired_file: &Path) -> Result<IngestResult> {
    let ingest_span = info_span!(
        "ingest",
        data_file = %data_file.display(),
        expired_file = %expired_file.display()
    );
    let _ingest_guard = ingest_span.enter();
    let ingest_start = Instant::now();

    let invoices = load_invoices(data_file)?;
    let expired_ids = load_expired_ids(expired_file)?;

    info!(
        invoice_count = invoices.len(),
        expired_id_count = expired_ids.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult {
        invoices,
        expired_ids,
    })
}

/// Run the flattener over the loaded inputs.
pub fn transform(invoices: &[Invoice], expired_ids: &BTreeSet<String>) -> Result<FlatTable> {
    let transform_span = info_span!("transform", invoice_count = invoices.len());
    let _transform_guard = transform_span.enter();
    let transform_start = Instant::now();

    let table = flatten_invoices(invoices, expired_ids).context("flatten invoices")?;

    info!(
        row_count = table.record_count(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );
    Ok(table)
}

/// Write the output artifact. Returns the written path, or `None` on a
/// dry run.
pub fn output(table: &FlatTable, path: &Path, dry_run: bool) -> Result<Option<PathBuf>> {
    let output_span = info_span!("output", output_file = %path.display());
    let _output_guard = output_span.enter();
    let output_start = Instant::now();

    if dry_run {
        info!(
            row_count = table.record_count(),
            duration_ms = output_start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(None);
    }

    write_csv(table, path).with_context(|| format!("write {}", path.display()))?;

    info!(
        output_file = %path.display(),
        row_count = table.record_count(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    Ok(Some(path.to_path_buf()))
}

/// Group the sorted table back into per-invoice summary lines.
pub fn summarize_invoices(table: &FlatTable) -> Vec<InvoiceSummary> {
    let mut summaries: Vec<InvoiceSummary> = Vec::new();
    for row in &table.rows {
        match summaries.last_mut() {
            Some(last) if last.invoice_id == row.invoice_id => {
                last.records += 1;
                if let Some(total) = row.total_price {
                    last.invoice_total = Some(last.invoice_total.unwrap_or(0.0) + total);
                }
            }
            _ => summaries.push(InvoiceSummary {
                invoice_id: row.invoice_id,
                records: 1,
                invoice_total: row.total_price,
                is_expired: row.is_expired,
            }),
        }
    }
    summaries
}
