//! CSV emission for flattened invoice tables.
//!
//! Comma delimiter, header row, no index column, columns in the fixed
//! order defined by [`FlatTable::COLUMNS`]. Formatting of the numeric
//! item columns follows the table's typing decision; this is the only
//! place that decision takes effect.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use csv::WriterBuilder;

use invflat_model::{FlatRow, FlatTable, NumericTyping};

/// Timestamp rendering for the created_on column.
const CREATED_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write the table to a CSV file.
pub fn write_csv(table: &FlatTable, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    write_records(table, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

/// Write the table to any destination. Used by tests and previews.
pub fn write_csv_to<W: Write>(table: &FlatTable, destination: W) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(destination);
    write_records(table, &mut writer)?;
    writer.flush().context("flush csv")?;
    Ok(())
}

fn write_records<W: Write>(table: &FlatTable, writer: &mut csv::Writer<W>) -> Result<()> {
    writer
        .write_record(FlatTable::COLUMNS)
        .context("write header")?;
    for row in &table.rows {
        writer
            .write_record(render_row(row, table.numeric_typing))
            .context("write row")?;
    }
    Ok(())
}

/// Render one row into its nine cells, in column order.
pub fn render_row(row: &FlatRow, typing: NumericTyping) -> [String; 9] {
    [
        row.invoice_id.to_string(),
        render_timestamp(row.created_on),
        render_opt_int(row.invoiceitem_id),
        row.invoiceitem_name.clone().unwrap_or_default(),
        row.item_type
            .map(|item_type| item_type.as_str().to_string())
            .unwrap_or_default(),
        render_float(row.unit_price, typing),
        render_float(row.total_price, typing),
        render_float(row.percentage_in_invoice, typing),
        row.is_expired.to_string(),
    ]
}

fn render_timestamp(value: Option<NaiveDateTime>) -> String {
    value
        .map(|timestamp| timestamp.format(CREATED_ON_FORMAT).to_string())
        .unwrap_or_default()
}

fn render_opt_int(value: Option<i64>) -> String {
    value.map(|id| id.to_string()).unwrap_or_default()
}

/// Nullable float rendering. Under strict typing whole values keep one
/// decimal place so the column reads as numeric throughout; loose typing
/// imposes no shape.
fn render_float(value: Option<f64>, typing: NumericTyping) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match typing {
        NumericTyping::Strict if value.fract() == 0.0 && value.is_finite() => {
            format!("{value:.1}")
        }
        _ => format!("{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use invflat_model::ItemType;

    fn sample_row() -> FlatRow {
        FlatRow {
            invoice_id: 123,
            created_on: NaiveDate::from_ymd_opt(2023, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0)),
            invoiceitem_id: Some(1),
            invoiceitem_name: Some("Bolt".to_string()),
            item_type: Some(ItemType::Material),
            unit_price: Some(2.0),
            total_price: Some(20.0),
            percentage_in_invoice: Some(1.0),
            is_expired: true,
        }
    }

    #[test]
    fn renders_full_row_strict() {
        let cells = render_row(&sample_row(), NumericTyping::Strict);
        assert_eq!(
            cells,
            [
                "123",
                "2023-01-01 00:00:00",
                "1",
                "Bolt",
                "Material",
                "2.0",
                "20.0",
                "1.0",
                "true",
            ]
        );
    }

    #[test]
    fn strict_typing_keeps_fractional_values_verbatim() {
        let mut row = sample_row();
        row.unit_price = Some(2.5);
        let cells = render_row(&row, NumericTyping::Strict);
        assert_eq!(cells[5], "2.5");
    }

    #[test]
    fn loose_typing_renders_plain_display() {
        let mut row = sample_row();
        row.invoiceitem_id = None;
        row.invoiceitem_name = None;
        row.item_type = None;
        let cells = render_row(&row, NumericTyping::Loose);
        assert_eq!(cells[5], "2");
        assert_eq!(cells[6], "20");
    }

    #[test]
    fn missing_values_render_as_empty_cells() {
        let row = FlatRow::empty(5, None, false);
        let cells = render_row(&row, NumericTyping::Loose);
        assert_eq!(
            cells,
            ["5", "", "", "", "", "", "", "", "false"]
        );
    }

    #[test]
    fn writes_header_and_rows() {
        let table = FlatTable {
            rows: vec![sample_row()],
            numeric_typing: NumericTyping::Strict,
        };
        let mut buffer = Vec::new();
        write_csv_to(&table, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "invoice_id,created_on,invoiceitem_id,invoiceitem_name,type,\
                 unit_price,total_price,percentage_in_invoice,is_expired"
            )
        );
        assert_eq!(
            lines.next(),
            Some("123,2023-01-01 00:00:00,1,Bolt,Material,2.0,20.0,1.0,true")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let table = FlatTable {
            rows: vec![FlatRow::empty(9, None, false)],
            numeric_typing: NumericTyping::Loose,
        };
        write_csv(&table, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("invoice_id,"));
        assert!(text.contains("9,,,,,,,,false"));
    }
}
