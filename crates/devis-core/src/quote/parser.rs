//! Page parser: scalar extraction, address segmentation and assembly.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{DevisConfig, PageRecord, PageText};

use super::address::{AddressSegmenter, AddressSegments};
use super::assembler::RecordAssembler;
use super::rules::patterns::REMOVED_UNITS_LABEL;
use super::rules::UnitCount;
use super::scalar::{ScalarExtractor, ScalarFields};
use super::warning::{ExtractWarning, WarningCode};

/// Result of parsing one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageExtraction {
    /// Assembled record.
    pub record: PageRecord,
    /// Extraction warnings. They never change the record.
    pub warnings: Vec<ExtractWarning>,
}

/// Trait for page parsing.
pub trait PageParser {
    /// Parse the page at `page_index` (0-based, document order).
    fn parse(&self, page_index: usize, page: &PageText) -> PageExtraction;
}

/// Parser for RES-EC-104 quote pages.
pub struct QuotePageParser {
    scalars: ScalarExtractor,
    segmenter: AddressSegmenter,
    assembler: RecordAssembler,
}

impl QuotePageParser {
    pub fn new(config: &DevisConfig) -> Self {
        Self {
            scalars: ScalarExtractor::new(&config.extraction),
            segmenter: AddressSegmenter::new(config.extraction.stop_markers.clone()),
            assembler: RecordAssembler::new(config.parties.clone(), config.operation.clone()),
        }
    }
}

impl Default for QuotePageParser {
    fn default() -> Self {
        Self::new(&DevisConfig::default())
    }
}

impl PageParser for QuotePageParser {
    fn parse(&self, page_index: usize, page: &PageText) -> PageExtraction {
        let text = page.text();
        debug!("Parsing page {} ({} chars)", page.number, text.len());

        let scalars = self.scalars.extract(text);
        let address = self.segmenter.segment(text);
        let warnings = collect_warnings(text, &scalars, &address)
            .into_iter()
            .map(|w| w.with_page(page.number))
            .collect();

        PageExtraction {
            record: self.assembler.assemble(page_index, &scalars, &address),
            warnings,
        }
    }
}

fn collect_warnings(
    text: &str,
    scalars: &ScalarFields,
    address: &AddressSegments,
) -> Vec<ExtractWarning> {
    let mut warnings = Vec::new();

    if scalars.header.number.is_empty() {
        warnings.push(ExtractWarning::new(
            WarningCode::MissingQuoteNumber,
            "Could not extract quote number",
        ));
    }

    if !address.marker_found {
        warnings.push(ExtractWarning::new(
            WarningCode::MissingWorksAddress,
            "No works address marker on page",
        ));
    } else if address.works.postal_code.is_empty() {
        warnings.push(ExtractWarning::new(
            WarningCode::WorksPostalCodeNotFound,
            "Works address has no postal code line",
        ));
    }

    if address.office_from_works {
        warnings.push(ExtractWarning::new(
            WarningCode::OfficeAddressFromWorks,
            "Registered office not found, using works address",
        ));
    }

    if let Some(premium) = &scalars.premium {
        if premium.value.is_none() {
            warnings.push(ExtractWarning::new(
                WarningCode::UnparseablePremium,
                format!("Could not read CEE premium amount: {:?}", premium.raw),
            ));
        }
    }

    if scalars.unit_count == UnitCount::NotANumber && REMOVED_UNITS_LABEL.is_match(text) {
        warnings.push(ExtractWarning::new(
            WarningCode::UnparseableUnitCount,
            "Removed units label present but no count",
        ));
    }

    if !scalars.quote_date.is_empty() && !is_valid_date(&scalars.quote_date) {
        warnings.push(ExtractWarning::new(
            WarningCode::InvalidQuoteDate,
            format!("Quote date is not a calendar date: {}", scalars.quote_date),
        ));
    }

    warnings
}

/// dd/mm/yyyy or dd/mm/yy.
fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").is_ok() || NaiveDate::parse_from_str(s, "%d/%m/%y").is_ok()
}
