use std::path::PathBuf;

use invflat_model::FlatTable;

#[derive(Debug)]
pub struct FlattenResult {
    /// Written output path; `None` on dry runs.
    pub output: Option<PathBuf>,
    pub table: FlatTable,
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummary {
    pub invoice_id: i64,
    pub records: usize,
    /// Sum of the invoice's defined line totals; `None` when no line has
    /// a defined total.
    pub invoice_total: Option<f64>,
    pub is_expired: bool,
}
