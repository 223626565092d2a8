//! Integer count extraction ("Nombre de dépose").

use super::patterns::REMOVED_UNITS;
use super::FieldExtractor;

/// Outcome of reading a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCount {
    /// A count read from digits.
    Count(i64),
    /// Label absent or value not purely digits. Distinct from a real zero.
    NotANumber,
}

impl UnitCount {
    pub fn value(self) -> Option<i64> {
        match self {
            Self::Count(n) => Some(n),
            Self::NotANumber => None,
        }
    }
}

/// Parse a count made only of ASCII digits.
pub fn parse_unit_count(s: &str) -> UnitCount {
    let s = s.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return UnitCount::NotANumber;
    }
    s.parse().map_or(UnitCount::NotANumber, UnitCount::Count)
}

/// Extractor for the number of removed units.
pub struct UnitCountExtractor;

impl UnitCountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnitCountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for UnitCountExtractor {
    type Output = UnitCount;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = REMOVED_UNITS.captures(text)?;
        Some(parse_unit_count(&caps[1]))
    }
}
