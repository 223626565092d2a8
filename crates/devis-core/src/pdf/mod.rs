//! PDF page text reading.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;
use crate::models::PageText;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Extract every page in document order.
    ///
    /// The outer error means the document itself is unusable. Inner errors
    /// are confined to their page.
    fn extract_pages(&self) -> Result<Vec<Result<PageText>>>;
}
