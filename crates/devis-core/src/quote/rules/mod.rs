//! Rule-based field extractors for quote pages.

pub mod contact;
pub mod counts;
pub mod identifiers;
pub mod money;
pub mod patterns;

pub use contact::{
    extract_phone, normalize_email, split_name, EmailExtractor, NameOrder, NameSplitPolicy,
    NameStrategy, PersonName, RepresentativeExtractor,
};
pub use counts::{parse_unit_count, UnitCount, UnitCountExtractor};
pub use identifiers::{extract_quote_header, siren_from_siret, QuoteHeader, Siret, SiretExtractor};
pub use money::{format_french_amount, parse_money, Money, PremiumExtractor};
pub use patterns::*;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text. `None` means the label was not found.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// First match of `pattern` in `text`, capture group 1, trimmed.
pub fn extract_first<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    extract_group(pattern, text, 1)
}

/// First match of `pattern` in `text`, the given capture group, trimmed.
pub fn extract_group<'t>(pattern: &Regex, text: &'t str, group: usize) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().trim())
}

/// Like [`extract_first`], falling back to `default` when nothing matches.
pub fn extract_first_or(pattern: &Regex, text: &str, default: &str) -> String {
    extract_first(pattern, text).unwrap_or(default).to_string()
}
