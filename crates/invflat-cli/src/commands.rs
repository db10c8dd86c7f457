use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use invflat_cli::pipeline::{IngestResult, ingest, output, summarize_invoices, transform};
use invflat_cli::types::FlattenResult;
use invflat_model::{ItemType, LEGACY_MARKER};

use crate::cli::FlattenArgs;

pub fn run_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Label"]);
    table.add_row(vec![LEGACY_MARKER.to_string(), "Material (legacy)".to_string()]);
    for (code, item_type) in ItemType::code_table() {
        table.add_row(vec![code.to_string(), item_type.as_str().to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_flatten(args: &FlattenArgs) -> Result<FlattenResult> {
    let run_span = info_span!(
        "flatten",
        data_file = %args.data_file.display(),
        dry_run = args.dry_run
    );
    let _run_guard = run_span.enter();

    let IngestResult {
        invoices,
        expired_ids,
    } = ingest(&args.data_file, &args.expired_file)?;

    let table = transform(&invoices, &expired_ids)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.data_file));
    let written = output(&table, &output_path, args.dry_run)?;

    let invoice_summaries = summarize_invoices(&table);
    Ok(FlattenResult {
        output: written,
        invoices: invoice_summaries,
        table,
    })
}

/// Default destination: output.csv alongside the data file.
fn default_output_path(data_file: &Path) -> PathBuf {
    data_file.with_file_name("output.csv")
}
