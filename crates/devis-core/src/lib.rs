//! Core library for CEE quote extraction.
//!
//! This crate provides:
//! - PDF page text reading
//! - Rule-based field extraction for RES-EC-104 quote pages
//! - Mapping of each page to one row of the "Recensement" table
//! - Schema template reading and xlsx/csv/json table writing

pub mod error;
pub mod models;
pub mod pdf;
pub mod quote;
pub mod sheet;

pub use error::{DevisError, OutputError, PageError, PdfError, Result, TemplateError};
pub use models::{DevisConfig, FieldValue, PageRecord, PageText, Table, TableFormat};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use quote::{
    BatchReport, ExtractWarning, PageFailure, PageParser, QuoteConverter, QuotePageParser,
    WarningCode,
};
pub use sheet::{read_schema_columns, render_table, write_table};

/// Read every page of a PDF and convert it with `config`.
///
/// Fails only when the document as a whole cannot be opened; page-level
/// problems are reported in the returned [`BatchReport`].
pub fn convert_pdf(data: &[u8], config: &DevisConfig) -> Result<BatchReport> {
    let extractor = PdfExtractor::from_bytes(data)?;
    let pages = extractor.extract_pages()?;
    Ok(QuoteConverter::new(config).convert(pages))
}
