//! Schema template reading and output table writing.

mod template;
mod writer;

pub use template::{dedupe_columns, read_schema_columns};
pub use writer::{render_table, write_table, XLSX_MAX_COLUMNS, XLSX_MAX_ROWS};
