//! Quote number, beneficiary name and SIRET/SIREN extraction.

use super::patterns::{QUOTE_HEADER, SIRET};
use super::{extract_first, FieldExtractor};

/// Values read from the "DEVIS <number> <name>" header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteHeader {
    /// Quote number (first token after DEVIS).
    pub number: String,
    /// Beneficiary legal name (rest of the header).
    pub beneficiary_name: String,
}

/// Extract the quote number and beneficiary name from the first header
/// line. Missing parts are empty.
pub fn extract_quote_header(text: &str) -> QuoteHeader {
    let Some(caps) = QUOTE_HEADER.captures(text) else {
        return QuoteHeader::default();
    };
    let group = |i| caps.get(i).map_or("", |m| m.as_str().trim()).to_string();
    QuoteHeader {
        number: group(1),
        beneficiary_name: group(2),
    }
}

/// A SIRET as labeled on the page with its derived SIREN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Siret {
    /// Digits as captured (9 to 14).
    pub digits: String,
    /// Leading 9 digits.
    pub siren: String,
}

/// Extractor for "Siret : <digits>".
pub struct SiretExtractor;

impl SiretExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SiretExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SiretExtractor {
    type Output = Siret;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let digits = extract_first(&SIRET, text)?;
        let siren = siren_from_siret(digits)?;
        Some(Siret {
            digits: digits.to_string(),
            siren: siren.to_string(),
        })
    }
}

/// The SIREN (leading 9 digits) of a SIRET, if it is long enough.
pub fn siren_from_siret(siret: &str) -> Option<&str> {
    if siret.len() >= 9 && siret.is_char_boundary(9) && siret[..9].chars().all(|c| c.is_ascii_digit()) {
        Some(&siret[..9])
    } else {
        None
    }
}
