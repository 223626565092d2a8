//! Amount extraction for quotes.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::CEE_PREMIUM;
use super::FieldExtractor;

/// A labeled amount as found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    /// Captured text, trimmed.
    pub raw: String,
    /// Normalized value, `None` when the text is not a number.
    pub value: Option<Decimal>,
}

/// Extractor for the "Prime CEE : ... €" amount.
pub struct PremiumExtractor;

impl PremiumExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PremiumExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PremiumExtractor {
    type Output = Money;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = CEE_PREMIUM.captures(text)?;
        let raw = caps[1].trim().to_string();
        let value = parse_money(&raw);
        Some(Money { raw, value })
    }
}

/// Parse a French-formatted amount (e.g. "1 234,56" or "1234.56").
///
/// Spaces, including non-breaking ones, are thousands separators and a comma
/// is the decimal separator. Anything else yields `None`.
pub fn parse_money(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{00a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

/// Format amount in French style (1 234,56).
pub fn format_french_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let (sign, s) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };

    let Some((integer_part, decimal_part)) = s.split_once('.') else {
        return format!("{}{}", sign, s);
    };

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(' ');
        }
        formatted.push(*c);
    }

    format!("{}{},{}", sign, formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("1234.56"), Some(dec("1234.56")));
        assert_eq!(parse_money("1\u{00a0}234,56"), Some(dec("1234.56")));
        assert_eq!(parse_money("1 234,56"), Some(dec("1234.56")));
        assert_eq!(parse_money("12 345 678,90"), Some(dec("12345678.90")));
    }

    #[test]
    fn test_parse_money_rejects_text() {
        assert_eq!(parse_money("n/a"), None);
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("   "), None);
        // Dot thousands with comma decimals is not a supported layout.
        assert_eq!(parse_money("1.234,56"), None);
    }

    #[test]
    fn test_parse_money_is_idempotent() {
        let once = parse_money("1 234,50").unwrap();
        let twice = parse_money(&once.to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_premium_extractor() {
        let text = "Total HT : 5 000,00 €\nPrime CEE : 1 234,50 €\n";
        let premium = PremiumExtractor::new().extract(text).unwrap();
        assert_eq!(premium.raw, "1 234,50");
        assert_eq!(premium.value, Some(dec("1234.50")));
    }

    #[test]
    fn test_premium_extractor_english_label() {
        let premium = PremiumExtractor::new()
            .extract("CEE Premium : 1\u{00a0}234,50 €")
            .unwrap();
        assert_eq!(premium.value, Some(dec("1234.50")));
    }

    #[test]
    fn test_premium_missing() {
        assert!(PremiumExtractor::new().extract("Prime CEE : à définir").is_none());
    }

    #[test]
    fn test_format_french_amount() {
        assert_eq!(format_french_amount(dec("1234.56")), "1 234,56");
        assert_eq!(format_french_amount(dec("12345678.9")), "12 345 678,90");
        assert_eq!(format_french_amount(dec("-950")), "-950,00");
    }
}
