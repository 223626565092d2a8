//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::PageText;

/// PDF page text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF and return the extractor.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut extractor = Self::new();
        extractor.load(data)?;
        Ok(extractor)
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Split pdf-extract output on form feeds, dropping the trailing empty page.
fn split_text_into_pages(raw_text: &str) -> Vec<&str> {
    let mut pages: Vec<&str> = raw_text.split('\u{000C}').collect();
    if pages.last().is_some_and(|p| p.is_empty()) {
        pages.pop();
    }
    pages
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        self.document()?;
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self.document()?;
        if !doc.get_pages().contains_key(&page) {
            return Err(PdfError::InvalidPage(page));
        }
        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(format!("page {}: {}", page, e)))
    }

    fn extract_pages(&self) -> Result<Vec<Result<PageText>>> {
        let doc = self.document()?;
        let numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

        // pdf-extract keeps reading order better; use it when its page
        // breaks line up with the page tree.
        match self.extract_text() {
            Ok(text) => {
                let split = split_text_into_pages(&text);
                if split.len() == numbers.len() {
                    debug!("Using pdf-extract text for {} pages", numbers.len());
                    return Ok(numbers
                        .iter()
                        .zip(split)
                        .map(|(n, t)| Ok(PageText::new(*n, t)))
                        .collect());
                }
                debug!(
                    "pdf-extract produced {} pages for {} in the page tree, reading per page",
                    split.len(),
                    numbers.len()
                );
            }
            Err(e) => debug!("pdf-extract failed ({}), reading per page", e),
        }

        Ok(numbers
            .iter()
            .map(|n| self.extract_page_text(*n).map(|t| PageText::new(*n, &t)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_extract_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_pages(), Err(PdfError::Parse(_))));
        assert!(matches!(extractor.extract_page_text(1), Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(matches!(
            PdfExtractor::from_bytes(b"not a pdf at all"),
            Err(PdfError::Parse(_))
        ));
    }

    #[test]
    fn test_split_form_feed_pages() {
        assert_eq!(split_text_into_pages("p1\u{000C}p2\u{000C}"), vec!["p1", "p2"]);
        assert_eq!(split_text_into_pages("only"), vec!["only"]);
        assert!(split_text_into_pages("").is_empty());
    }
}
