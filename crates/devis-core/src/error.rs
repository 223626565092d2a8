//! Error types for the devis-core library.

use thiserror::Error;

/// Main error type for the devis library.
///
/// Every variant here is a batch-level failure: the whole conversion stops
/// and no output is written. Problems confined to a single page are
/// reported through [`PageError`] instead and never abort the batch.
#[derive(Error, Debug)]
pub enum DevisError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Schema template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Output table error.
    #[error("output error: {0}")]
    Output(#[from] OutputError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to reading the schema template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template workbook could not be opened.
    #[error("failed to open template {path}: {reason}")]
    Open { path: String, reason: String },

    /// The requested sheet is missing from the workbook.
    #[error("sheet not found in template: {0}")]
    SheetNotFound(String),

    /// The sheet has no header row.
    #[error("template sheet {0} has no header row")]
    NoHeader(String),

    /// The template format is not recognized.
    #[error("unsupported template format: {0}")]
    UnsupportedFormat(String),

    /// CSV template error.
    #[error("CSV template error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors related to writing the output table.
#[derive(Error, Debug)]
pub enum OutputError {
    /// XLSX writer error.
    #[error("XLSX writer error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// CSV writer error.
    #[error("CSV writer error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The table has more rows or columns than the format allows.
    #[error("table too large for {format}: {rows} rows x {columns} columns")]
    TooLarge {
        format: &'static str,
        rows: usize,
        columns: usize,
    },
}

/// Errors confined to a single page of a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The reader could not produce text for this page.
    #[error("page could not be read: {0}")]
    Unreadable(#[from] PdfError),

    /// The page produced no text at all.
    #[error("page has no text")]
    NoText,
}

/// Result type for the devis library.
pub type Result<T> = std::result::Result<T, DevisError>;
