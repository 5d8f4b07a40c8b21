// src/presentation/metrics.rs
use std::io::Write;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};

use corpus_profile_domain::{MetricValue, MetricsTable};
use corpus_profile_shared_kernel::Result;

use crate::options::RowsFormat;

/// Writes the per-row metrics table in `format`. Rows keep input order.
pub fn write_metrics<W: Write>(out: &mut W, table: &MetricsTable, format: RowsFormat) -> Result<()> {
    match format {
        RowsFormat::Table => writeln!(out, "{}", render_table(table))?,
        RowsFormat::Csv => write_csv(out, table)?,
        RowsFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, table)?;
            writeln!(out)?;
        }
        RowsFormat::Jsonl => {
            for row in table {
                writeln!(out, "{}", serde_json::to_string(row)?)?;
            }
        }
    }
    Ok(())
}

fn cell_text(value: Option<MetricValue>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn render_table(table: &MetricsTable) -> Table {
    let mut header = vec!["#"];
    header.extend(table.column_names());

    let mut rendered = Table::new();
    rendered.load_preset(UTF8_FULL).set_header(header);
    for (index, row) in table.iter().enumerate() {
        let mut cells = vec![Cell::new(index).set_alignment(CellAlignment::Right)];
        cells.extend(
            table
                .columns()
                .iter()
                .map(|&c| Cell::new(cell_text(row.value(c))).set_alignment(CellAlignment::Right)),
        );
        rendered.add_row(cells);
    }
    rendered
}

fn write_csv<W: Write>(out: &mut W, table: &MetricsTable) -> Result<()> {
    writeln!(out, "{}", table.column_names().join(","))?;
    for row in table {
        let cells: Vec<String> = table.columns().iter().map(|&c| cell_text(row.value(c))).collect();
        writeln!(out, "{}", cells.join(","))?;
    }
    Ok(())
}
