//! Works address / registered office segmentation.
//!
//! The quote layout puts the works site first after the "ADRESSE DES
//! TRAVAUX" marker, followed by the beneficiary's registered office. The
//! first line carrying a postal code closes the works block; the office
//! block is whatever follows it, up to the detail table or the contact
//! labels.

use tracing::debug;

use super::rules::patterns::{POSTAL_LINE, POSTAL_PREFIX, SIRET_INLINE, WORKS_MARKER};

/// A street / postal code / city triple. Any part may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBlock {
    pub street: String,
    /// Exactly five digits when present.
    pub postal_code: String,
    pub city: String,
}

impl AddressBlock {
    pub fn is_empty(&self) -> bool {
        self.street.is_empty() && self.postal_code.is_empty() && self.city.is_empty()
    }

    /// Field by field, take `self` unless empty, else `fallback`.
    fn or(self, fallback: &AddressBlock) -> AddressBlock {
        fn pick(value: String, fallback: &str) -> String {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value
            }
        }

        AddressBlock {
            street: pick(self.street, &fallback.street),
            postal_code: pick(self.postal_code, &fallback.postal_code),
            city: pick(self.city, &fallback.city),
        }
    }
}

/// Result of segmenting one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSegments {
    /// Whether the works marker was present.
    pub marker_found: bool,
    /// First line after the marker.
    pub site_name: String,
    /// Address of the works site.
    pub works: AddressBlock,
    /// Address of the registered office, already resolved against `works`.
    pub office: AddressBlock,
    /// True when the office block had no postal code and `office` was taken
    /// from `works`.
    pub office_from_works: bool,
}

/// Splits the works address region into works and office blocks.
#[derive(Debug, Clone)]
pub struct AddressSegmenter {
    stop_markers: Vec<String>,
}

impl AddressSegmenter {
    pub fn new(stop_markers: Vec<String>) -> Self {
        Self { stop_markers }
    }

    /// Segment the address region of a page.
    ///
    /// Never fails: missing markers or postal codes leave fields empty.
    pub fn segment(&self, text: &str) -> AddressSegments {
        let Some(region) = self.works_region(text) else {
            debug!("No works address marker found");
            return AddressSegments::default();
        };

        let cleaned = SIRET_INLINE.replace_all(region, "");
        let lines: Vec<&str> = cleaned
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let site_name = lines.first().copied().unwrap_or_default().to_string();

        let (works, office_lines) = match find_postal_line(&lines) {
            Some((idx, postal_code, city)) => {
                let street = if idx > 0 { lines[idx - 1] } else { "" };
                debug!("Works block ends at line {} ({} {})", idx, postal_code, city);
                let works = AddressBlock {
                    street: street.to_string(),
                    postal_code,
                    city,
                };
                (works, &lines[idx + 1..])
            }
            None => {
                debug!("Works block has no postal code line");
                (AddressBlock::default(), &lines[lines.len()..])
            }
        };

        let office = office_block(office_lines);
        let office_from_works = office.is_empty() && !works.is_empty();
        if office_from_works {
            debug!("Office block has no postal code, using works address");
        }

        AddressSegments {
            marker_found: true,
            site_name,
            office: office.or(&works),
            works,
            office_from_works,
        }
    }

    /// Text after the works marker, cut at the earliest stop marker.
    fn works_region<'t>(&self, text: &'t str) -> Option<&'t str> {
        let marker = WORKS_MARKER.find(text)?;
        let region = &text[marker.end()..];

        let cut = self
            .stop_markers
            .iter()
            .filter(|m| !m.is_empty())
            .filter_map(|m| region.find(m.as_str()))
            .min()
            .unwrap_or(region.len());

        Some(&region[..cut])
    }
}

impl Default for AddressSegmenter {
    fn default() -> Self {
        Self::new(crate::models::ExtractionConfig::default().stop_markers)
    }
}

/// Index, postal code and city of the first postal code line.
fn find_postal_line(lines: &[&str]) -> Option<(usize, String, String)> {
    lines.iter().enumerate().find_map(|(idx, line)| {
        POSTAL_LINE
            .captures(line)
            .map(|caps| (idx, caps[1].to_string(), caps[2].trim().to_string()))
    })
}

/// Office address from the lines following the works block.
///
/// When the line before the postal code line also carries a postal code,
/// the site name and the address were printed on one line, so the postal
/// code line itself is used as the street.
fn office_block(lines: &[&str]) -> AddressBlock {
    let Some((idx, postal_code, city)) = find_postal_line(lines) else {
        return AddressBlock::default();
    };

    let street = if idx > 0 && !POSTAL_PREFIX.is_match(lines[idx - 1]) {
        lines[idx - 1]
    } else {
        lines[idx]
    };

    AddressBlock {
        street: street.to_string(),
        postal_code,
        city,
    }
}
