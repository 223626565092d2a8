//! Output table rendering in xlsx, csv and json.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::error::{OutputError, Result};
use crate::models::{FieldValue, Table, TableFormat};

/// Worksheet row limit, header included.
pub const XLSX_MAX_ROWS: usize = 1_048_576;

/// Worksheet column limit.
pub const XLSX_MAX_COLUMNS: usize = 16_384;

/// Render `table` in `format` fully in memory.
///
/// `sheet` names the worksheet for xlsx and is ignored otherwise.
pub fn render_table(
    table: &Table,
    format: TableFormat,
    sheet: &str,
) -> std::result::Result<Vec<u8>, OutputError> {
    match format {
        TableFormat::Xlsx => render_xlsx(table, sheet),
        TableFormat::Csv => render_csv(table),
        TableFormat::Json => Ok(serde_json::to_vec_pretty(table)?),
    }
}

/// Render `table` and write it to `path` in a single call.
pub fn write_table(table: &Table, path: &Path, format: TableFormat, sheet: &str) -> Result<()> {
    let bytes = render_table(table, format, sheet)?;
    std::fs::write(path, &bytes)?;
    info!(
        "Wrote {} rows x {} columns to {} ({})",
        table.row_count(),
        table.column_count(),
        path.display(),
        format.extension()
    );
    Ok(())
}

fn render_xlsx(table: &Table, sheet: &str) -> std::result::Result<Vec<u8>, OutputError> {
    if table.row_count() + 1 > XLSX_MAX_ROWS || table.column_count() > XLSX_MAX_COLUMNS {
        return Err(OutputError::TooLarge {
            format: "xlsx",
            rows: table.row_count(),
            columns: table.column_count(),
        });
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet)?;

    // Limits checked above, so the casts are lossless.
    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (r, row) in table.rows.iter().enumerate() {
        let row_num = (r + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                FieldValue::Text(s) if s.is_empty() => {}
                FieldValue::Text(s) => {
                    worksheet.write_string(row_num, col, s)?;
                }
                FieldValue::Decimal(_) | FieldValue::Integer(_) => {
                    if let Some(n) = value.as_f64() {
                        worksheet.write_number(row_num, col, n)?;
                    }
                }
                FieldValue::NotANumber | FieldValue::Empty => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn render_csv(table: &Table) -> std::result::Result<Vec<u8>, OutputError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| OutputError::Csv(csv::Error::from(e.into_error())))
}
