//! Invoice blob loading.
//!
//! The serialized format belongs to this loader, not the transform: the
//! core only sees `Vec<Invoice>`. The blob is a JSON array of invoice
//! objects; structural problems (missing `created_on`, missing
//! `quantity`, wrong shapes) fail here with the file path in context.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use invflat_model::Invoice;

/// Read a serialized invoice collection from disk.
pub fn load_invoices(path: &Path) -> Result<Vec<Invoice>> {
    let file =
        File::open(path).with_context(|| format!("open invoices: {}", path.display()))?;
    let invoices: Vec<Invoice> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse invoices: {}", path.display()))?;
    debug!(
        source_file = %path.display(),
        invoice_count = invoices.len(),
        "invoices loaded"
    );
    Ok(invoices)
}
