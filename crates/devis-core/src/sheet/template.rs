//! Header row reading from the schema template.

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::error::TemplateError;

/// Read the ordered output columns from the header row of `sheet`.
///
/// Spreadsheets (`xlsx`, `xlsm`, `xlsb`, `xls`, `ods`) are read with
/// calamine; `csv` files use their first record and ignore `sheet`.
/// Empty header cells become `Unnamed: <index>` and repeated names are
/// suffixed `.1`, `.2`, ...
pub fn read_schema_columns(path: &Path, sheet: &str) -> Result<Vec<String>, TemplateError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let raw = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook_header(path, sheet)?,
        "csv" => read_csv_header(path)?,
        _ => return Err(TemplateError::UnsupportedFormat(path.display().to_string())),
    };

    let columns = dedupe_columns(raw);
    debug!("Read {} columns from {}", columns.len(), path.display());
    Ok(columns)
}

fn read_workbook_header(path: &Path, sheet: &str) -> Result<Vec<Option<String>>, TemplateError> {
    let open_error = |reason: String| TemplateError::Open {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| open_error(e.to_string()))?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(TemplateError::SheetNotFound(sheet.to_string()));
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| open_error(e.to_string()))?;

    // The range starts at the first used cell; columns before it are blank.
    let (_, first_col) = range
        .start()
        .ok_or_else(|| TemplateError::NoHeader(sheet.to_string()))?;
    let header = range
        .rows()
        .next()
        .ok_or_else(|| TemplateError::NoHeader(sheet.to_string()))?;

    let mut cells: Vec<Option<String>> = vec![None; first_col as usize];
    cells.extend(header.iter().map(header_cell));
    Ok(cells)
}

fn header_cell(cell: &Data) -> Option<String> {
    let s = match cell {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{:.0}", f),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => if *b { "True" } else { "False" }.to_string(),
        other => other.to_string(),
    };
    if s.is_empty() { None } else { Some(s) }
}

fn read_csv_header(path: &Path) -> Result<Vec<Option<String>>, TemplateError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(TemplateError::NoHeader(path.display().to_string()));
    }
    Ok(headers
        .iter()
        .map(|h| if h.is_empty() { None } else { Some(h.to_string()) })
        .collect())
}

/// Name blank headers `Unnamed: <index>` and suffix repeated names.
///
/// A repeat of `name` becomes `name.1`, then `name.2`; a generated name
/// that collides with a later header is bumped again, so every output
/// name is unique.
pub fn dedupe_columns<I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .enumerate()
        .map(|(index, header)| {
            let mut name = header.unwrap_or_else(|| format!("Unnamed: {}", index));
            let mut seen = counts.get(&name).copied().unwrap_or(0);
            while seen > 0 {
                counts.insert(name.clone(), seen + 1);
                name = format!("{}.{}", name, seen);
                seen = counts.get(&name).copied().unwrap_or(0);
            }
            counts.insert(name.clone(), 1);
            name
        })
        .collect()
}
