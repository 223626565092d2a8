//! Common regex patterns for quote extraction.
//!
//! Labels accept both the French wording found on real quotes and the
//! English wording. Every labeled pattern is searched in multi-line mode and
//! captures the value in group 1.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Reference and date
    pub static ref CUSTOMER_NUMBER: Regex = Regex::new(
        r"(?m)(?:Numéro Client|Customer Number)\s*:\s*(.+)"
    ).unwrap();

    pub static ref QUOTE_DATE: Regex = Regex::new(
        r"(?m)Date\s*:\s*([0-9/]{8,10})"
    ).unwrap();

    // Money (French format: 1 234,50 €)
    pub static ref CEE_PREMIUM: Regex = Regex::new(
        r"(?m)(?:Prime CEE|CEE Premium)\s*:\s*([0-9\s\u{00a0}\u{202f},.]+)\s*€"
    ).unwrap();

    // Quote header: "DEVIS <number> <beneficiary legal name>", the name
    // being optional and limited to the header line
    pub static ref QUOTE_HEADER: Regex = Regex::new(
        r"(?m)DEVIS\s+(\S+)(?:[ \t]+(.+))?"
    ).unwrap();

    // SIRET (14 digits, first 9 are the SIREN)
    pub static ref SIRET: Regex = Regex::new(
        r"(?mi)Siret\s*:\s*([0-9]{9,14})"
    ).unwrap();

    pub static ref SIRET_INLINE: Regex = Regex::new(
        r"(?i)Siret\s*:\s*\d+"
    ).unwrap();

    // Contact
    pub static ref REPRESENTED_BY: Regex = Regex::new(
        r"(?m)(?:Représenté par|Represented by)\s*:\s*(.+)"
    ).unwrap();

    pub static ref PHONE: Regex = Regex::new(
        r"(?m)\bT[ée]l\s*:\s*(.+)"
    ).unwrap();

    pub static ref EMAIL: Regex = Regex::new(
        r"(?m)Mail\s*:\s*(.+)"
    ).unwrap();

    // Counts
    pub static ref REMOVED_UNITS: Regex = Regex::new(
        r"(?m)(?:Nombre de dépose|Number of removed units)\s*:\s*([0-9]+)"
    ).unwrap();

    pub static ref REMOVED_UNITS_LABEL: Regex = Regex::new(
        r"(?:Nombre de dépose|Number of removed units)\s*:"
    ).unwrap();

    // Address block
    pub static ref WORKS_MARKER: Regex = Regex::new(
        r"(?:ADRESSE DES TRAVAUX|ADDRESS OF WORKS)(?:[ \t\u{00a0}]*:)?"
    ).unwrap();

    pub static ref POSTAL_LINE: Regex = Regex::new(
        r"\b(\d{5})\s+(.+)"
    ).unwrap();

    pub static ref POSTAL_PREFIX: Regex = Regex::new(
        r"\b\d{5}\s"
    ).unwrap();
}
