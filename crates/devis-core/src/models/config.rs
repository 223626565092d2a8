//! Configuration structures for the quote conversion pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::quote::rules::contact::NameSplitPolicy;

/// Main configuration for the devis pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevisConfig {
    /// Requester and professional identities copied into every row.
    pub parties: PartyConstants,

    /// Fixed per-operation metadata.
    pub operation: OperationConfig,

    /// Field extraction heuristics.
    pub extraction: ExtractionConfig,

    /// Schema template location.
    pub template: TemplateConfig,

    /// Output table settings.
    pub output: OutputConfig,
}

/// Caller-supplied identities.
///
/// The defaults describe the common case where the requester also performs
/// the work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyConstants {
    /// Legal name of the requester.
    pub requester_name: String,

    /// SIREN of the requester.
    pub requester_siren: String,

    /// Legal name of the professional performing the work.
    pub professional_name: String,

    /// SIREN of the professional performing the work.
    pub professional_siren: String,
}

impl Default for PartyConstants {
    fn default() -> Self {
        Self {
            requester_name: "GLE".to_string(),
            requester_siren: "829067826".to_string(),
            professional_name: "GLE".to_string(),
            professional_siren: "829067826".to_string(),
        }
    }
}

/// Fixed metadata written on every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationConfig {
    /// Standardized operation sheet code.
    pub fiche_code: String,

    /// Bonus category label.
    pub bonus_category: String,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            fiche_code: "RES-EC-104".to_string(),
            bonus_category: "ZNI".to_string(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How "Représenté par" is split into surname and given name.
    pub name_split: NameSplitPolicy,

    /// Phrases that end the works address region. The earliest one found
    /// in the text wins.
    pub stop_markers: Vec<String>,

    /// Email values starting with one of these (case-insensitive) count as
    /// no email.
    pub none_tokens: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            name_split: NameSplitPolicy::default(),
            stop_markers: [
                "Détail Quantité",
                "Detail Quantité",
                "Detail Quantity",
                "Représenté par",
                "Represented by",
                "Tél :",
                "Tél:",
                "Tel :",
                "Tel:",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
            none_tokens: vec!["néant".to_string(), "none".to_string()],
        }
    }
}

/// Schema template location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Path to the template workbook.
    pub path: PathBuf,

    /// Sheet holding the header row.
    pub sheet: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("modele_res_ec_104.xlsx"),
            sheet: "Recensement".to_string(),
        }
    }
}

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Excel workbook.
    #[default]
    Xlsx,
    /// Comma-separated values.
    Csv,
    /// JSON object with columns and rows.
    Json,
}

impl TableFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xlsx" => Some(Self::Xlsx),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Output table settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sheet name in the written workbook.
    pub sheet: String,

    /// Default output format.
    pub format: TableFormat,

    /// Default output file name.
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sheet: "Recensement".to_string(),
            format: TableFormat::Xlsx,
            file_name: "Tableau_de_recensement_rempli.xlsx".to_string(),
        }
    }
}

impl DevisConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
