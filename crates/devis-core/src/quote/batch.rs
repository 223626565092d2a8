//! Batch conversion of document pages into table rows.

use std::time::Instant;

use tracing::{info, warn};

use crate::error::{PageError, PdfError};
use crate::models::{DevisConfig, PageRecord, PageText, Table};

use super::parser::{PageParser, QuotePageParser};
use super::projection::project;
use super::warning::ExtractWarning;

/// A page that could not be read or had no text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    /// Page number (1-indexed).
    pub page: u32,
    pub error: PageError,
}

/// Outcome of converting one document.
///
/// `records` always holds one record per page, in document order. A failed
/// page still contributes a record assembled from empty text.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of pages seen.
    pub page_count: usize,
    /// One record per page.
    pub records: Vec<PageRecord>,
    /// Pages that failed.
    pub failures: Vec<PageFailure>,
    /// Extraction warnings from readable pages.
    pub warnings: Vec<ExtractWarning>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl BatchReport {
    /// Lay the records out under the schema columns.
    pub fn table(&self, columns: &[String]) -> Table {
        project(&self.records, columns)
    }

    /// Pages converted without failure.
    pub fn succeeded(&self) -> usize {
        self.page_count - self.failures.len()
    }

    /// No failures and no warnings.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.warnings.is_empty()
    }
}

/// Converts the pages of one document into records.
pub struct QuoteConverter<P: PageParser = QuotePageParser> {
    parser: P,
}

impl QuoteConverter {
    pub fn new(config: &DevisConfig) -> Self {
        Self {
            parser: QuotePageParser::new(config),
        }
    }
}

impl Default for QuoteConverter {
    fn default() -> Self {
        Self::new(&DevisConfig::default())
    }
}

impl<P: PageParser> QuoteConverter<P> {
    /// Use a custom page parser.
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Convert pages in document order.
    ///
    /// A page error never aborts the batch: it is recorded as a
    /// [`PageFailure`] and the page gets a record built from empty text.
    pub fn convert<I>(&self, pages: I) -> BatchReport
    where
        I: IntoIterator<Item = Result<PageText, PdfError>>,
    {
        let start = Instant::now();
        let mut report = BatchReport::default();

        for (index, page) in pages.into_iter().enumerate() {
            let number = u32::try_from(index + 1).unwrap_or(u32::MAX);

            let failure = match &page {
                Err(e) => Some(PageError::from(e.clone())),
                Ok(text) if text.is_empty() => Some(PageError::NoText),
                Ok(_) => None,
            };
            let page = page.unwrap_or_else(|_| PageText::new(number, ""));
            let extraction = self.parser.parse(index, &page);

            match failure {
                Some(error) => {
                    warn!("Page {}: {}", number, error);
                    report.failures.push(PageFailure { page: number, error });
                }
                None => report.warnings.extend(extraction.warnings),
            }
            report.records.push(extraction.record);
            report.page_count += 1;
        }

        report.processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Converted {} pages ({} failed, {} warnings) in {}ms",
            report.page_count,
            report.failures.len(),
            report.warnings.len(),
            report.processing_time_ms
        );

        report
    }

    /// Convert plain page texts, page numbers following slice order.
    pub fn convert_texts<S: AsRef<str>>(&self, texts: &[S]) -> BatchReport {
        self.convert(texts.iter().enumerate().map(|(i, t)| {
            Ok(PageText::new(
                u32::try_from(i + 1).unwrap_or(u32::MAX),
                t.as_ref(),
            ))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::columns as col;
    use crate::models::FieldValue;
    use crate::quote::parser::PageExtraction;

    #[test]
    fn test_convert_preserves_page_count_and_order() {
        let report = QuoteConverter::default().convert_texts(&[
            "DEVIS A-1 SCI A",
            "DEVIS B-2 SCI B",
            "DEVIS C-3 SCI C",
        ]);

        assert_eq!(report.page_count, 3);
        assert_eq!(report.records.len(), 3);
        let numbers: Vec<&str> = report.records.iter().map(|r| r.text(col::QUOTE_NUMBER)).collect();
        assert_eq!(numbers, vec!["A-1", "B-2", "C-3"]);
        assert_eq!(
            report.records[2].get(col::OPERATION_NUMBER),
            Some(&FieldValue::Integer(3))
        );
    }

    #[test]
    fn test_unreadable_page_isolated() {
        let pages = vec![
            Ok(PageText::new(1, "DEVIS A-1 SCI A")),
            Err(PdfError::TextExtraction("bad stream".to_string())),
            Ok(PageText::new(3, "DEVIS C-3 SCI C")),
        ];
        let report = QuoteConverter::default().convert(pages);

        assert_eq!(report.records.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(
            report.failures,
            vec![PageFailure {
                page: 2,
                error: PageError::Unreadable(PdfError::TextExtraction("bad stream".to_string())),
            }]
        );

        let failed = &report.records[1];
        assert_eq!(failed.text(col::QUOTE_NUMBER), "");
        assert_eq!(failed.text(col::FICHE_CODE), "RES-EC-104");
        assert_eq!(failed.get(col::OPERATION_NUMBER), Some(&FieldValue::Integer(2)));
        assert_eq!(report.records[2].text(col::QUOTE_NUMBER), "C-3");
    }

    #[test]
    fn test_blank_page_is_failure_without_warnings() {
        let report = QuoteConverter::default().convert_texts(&["   \n  "]);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].error, PageError::NoText);
        assert!(report.warnings.is_empty());
        assert_eq!(report.records.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let report = QuoteConverter::default().convert_texts::<&str>(&[]);
        assert_eq!(report.page_count, 0);
        assert!(report.is_clean());
        assert_eq!(report.table(&["a".to_string()]).row_count(), 0);
    }

    struct IndexParser;

    impl PageParser for IndexParser {
        fn parse(&self, page_index: usize, _page: &PageText) -> PageExtraction {
            let mut record = PageRecord::new();
            record.set("index", FieldValue::Integer(page_index as i64));
            PageExtraction {
                record,
                warnings: Vec::new(),
            }
        }
    }

    #[test]
    fn test_custom_parser() {
        let report = QuoteConverter::with_parser(IndexParser).convert_texts(&["a", "b"]);
        let table = report.table(&["index".to_string()]);

        assert_eq!(table.rows, vec![vec![FieldValue::Integer(0)], vec![FieldValue::Integer(1)]]);
    }
}
