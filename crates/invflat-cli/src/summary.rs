use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use invflat_model::FlatTable;
use invflat_report::render_row;

use crate::types::FlattenResult;

pub fn print_summary(result: &FlattenResult, preview: Option<usize>) {
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Invoice"),
        header_cell("Records"),
        header_cell("Invoice Total"),
        header_cell("Expired"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    let mut total_records = 0usize;
    let mut total_amount = 0f64;
    let mut expired_count = 0usize;
    for summary in &result.invoices {
        total_records += summary.records;
        if let Some(amount) = summary.invoice_total {
            total_amount += amount;
        }
        if summary.is_expired {
            expired_count += 1;
        }
        table.add_row(vec![
            Cell::new(summary.invoice_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.records),
            amount_cell(summary.invoice_total),
            expired_cell(summary.is_expired),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        Cell::new(format!("{total_amount:.2}")).add_attribute(Attribute::Bold),
        Cell::new(expired_count).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if let Some(limit) = preview {
        print_preview(&result.table, limit);
    }
}

/// Print the first rows of the flattened table, rendered exactly as the
/// CSV writer would serialize them.
fn print_preview(flat: &FlatTable, limit: usize) {
    let shown = flat.rows.len().min(limit);
    let mut table = Table::new();
    table.set_header(
        FlatTable::COLUMNS
            .iter()
            .map(|column| header_cell(column))
            .collect::<Vec<_>>(),
    );
    apply_preview_table_style(&mut table);
    for row in flat.rows.iter().take(limit) {
        table.add_row(
            render_row(row, flat.numeric_typing)
                .into_iter()
                .map(preview_cell)
                .collect::<Vec<_>>(),
        );
    }
    println!();
    println!("Preview ({} of {} rows):", shown, flat.rows.len());
    println!("{table}");
}

fn amount_cell(amount: Option<f64>) -> Cell {
    match amount {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
    }
}

fn expired_cell(is_expired: bool) -> Cell {
    if is_expired {
        Cell::new("yes").fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell("no")
    }
}

fn preview_cell(value: String) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_preview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
