//! Single-value field extraction over the full page text.

use crate::models::ExtractionConfig;

use super::rules::{
    extract_first_or, extract_phone, extract_quote_header, patterns::CUSTOMER_NUMBER,
    patterns::QUOTE_DATE, EmailExtractor, FieldExtractor, Money, PersonName, PremiumExtractor,
    QuoteHeader, RepresentativeExtractor, SiretExtractor, UnitCount, UnitCountExtractor,
};

/// Every scalar field of a quote page. Missing labels leave empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarFields {
    /// "Numéro Client".
    pub reference: String,
    /// Quote date as printed (dd/mm/yyyy), not reformatted.
    pub quote_date: String,
    /// CEE premium, `None` when the label is absent.
    pub premium: Option<Money>,
    /// Quote number and beneficiary legal name.
    pub header: QuoteHeader,
    /// Beneficiary SIREN (9 digits) or empty.
    pub siren: String,
    /// Beneficiary representative.
    pub representative: PersonName,
    pub phone: String,
    /// Email, empty when the page says "néant".
    pub email: String,
    /// Number of removed units.
    pub unit_count: UnitCount,
}

impl Default for ScalarFields {
    fn default() -> Self {
        Self {
            reference: String::new(),
            quote_date: String::new(),
            premium: None,
            header: QuoteHeader::default(),
            siren: String::new(),
            representative: PersonName::default(),
            phone: String::new(),
            email: String::new(),
            unit_count: UnitCount::NotANumber,
        }
    }
}

/// Labeled-pattern extractor for scalar fields.
pub struct ScalarExtractor {
    premium: PremiumExtractor,
    siret: SiretExtractor,
    representative: RepresentativeExtractor,
    email: EmailExtractor,
    units: UnitCountExtractor,
}

impl ScalarExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            premium: PremiumExtractor::new(),
            siret: SiretExtractor::new(),
            representative: RepresentativeExtractor::new(config.name_split.clone()),
            email: EmailExtractor::new(config.none_tokens.clone()),
            units: UnitCountExtractor::new(),
        }
    }

    /// Extract all scalar fields from the page text.
    pub fn extract(&self, text: &str) -> ScalarFields {
        ScalarFields {
            reference: extract_first_or(&CUSTOMER_NUMBER, text, ""),
            quote_date: extract_first_or(&QUOTE_DATE, text, ""),
            premium: self.premium.extract(text),
            header: extract_quote_header(text),
            siren: self.siret.extract(text).map(|s| s.siren).unwrap_or_default(),
            representative: self.representative.extract(text).unwrap_or_default(),
            phone: extract_phone(text).unwrap_or_default().to_string(),
            email: self.email.extract(text).unwrap_or_default(),
            unit_count: self.units.extract(text).unwrap_or(UnitCount::NotANumber),
        }
    }
}

impl Default for ScalarExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}
