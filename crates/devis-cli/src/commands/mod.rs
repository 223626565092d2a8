//! Subcommands and the helpers they share.

pub mod batch;
pub mod columns;
pub mod config;
pub mod convert;
pub mod extract;

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, warn};

use devis_core::models::columns::default_schema;
use devis_core::quote::rules::{NameOrder, NameSplitPolicy, NameStrategy};
use devis_core::{BatchReport, DevisConfig, TableFormat};

/// Per-run overrides of the configured constants.
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Legal name of the requester
    #[arg(long)]
    requester_name: Option<String>,

    /// SIREN of the requester
    #[arg(long)]
    requester_siren: Option<String>,

    /// Legal name of the professional performing the work
    #[arg(long)]
    professional_name: Option<String>,

    /// SIREN of the professional performing the work
    #[arg(long)]
    professional_siren: Option<String>,

    /// How "Représenté par" is split into surname and given name
    #[arg(long, value_enum)]
    name_order: Option<NameOrderArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum NameOrderArg {
    /// First token is the surname
    SurnameFirst,
    /// First token is the given name
    GivenNameFirst,
    /// The single all-capitals token is the surname, else surname first
    Uppercase,
}

impl From<NameOrderArg> for NameSplitPolicy {
    fn from(arg: NameOrderArg) -> Self {
        match arg {
            NameOrderArg::SurnameFirst => NameSplitPolicy::positional(NameOrder::SurnameFirst),
            NameOrderArg::GivenNameFirst => NameSplitPolicy::positional(NameOrder::GivenNameFirst),
            NameOrderArg::Uppercase => NameSplitPolicy {
                strategies: vec![
                    NameStrategy::UppercaseSurname,
                    NameStrategy::Positional {
                        order: NameOrder::SurnameFirst,
                    },
                ],
                ..NameSplitPolicy::default()
            },
        }
    }
}

impl OverrideArgs {
    /// Apply the overrides that were given.
    pub fn apply(&self, config: &mut DevisConfig) {
        let parties = &mut config.parties;
        if let Some(v) = &self.requester_name {
            parties.requester_name = v.clone();
        }
        if let Some(v) = &self.requester_siren {
            parties.requester_siren = v.clone();
        }
        if let Some(v) = &self.professional_name {
            parties.professional_name = v.clone();
        }
        if let Some(v) = &self.professional_siren {
            parties.professional_siren = v.clone();
        }
        if let Some(order) = self.name_order {
            config.extraction.name_split = order.into();
        }
    }
}

/// Output table format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    /// Excel workbook
    Xlsx,
    /// Comma-separated values
    Csv,
    /// JSON columns and rows
    Json,
}

impl From<FormatArg> for TableFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xlsx => TableFormat::Xlsx,
            FormatArg::Csv => TableFormat::Csv,
            FormatArg::Json => TableFormat::Json,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devis")
        .join("config.json")
}

/// Config from `--config`, else the user config file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DevisConfig> {
    if let Some(path) = config_path {
        return Ok(DevisConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using config file {}", path.display());
        Ok(DevisConfig::from_file(&path)?)
    } else {
        Ok(DevisConfig::default())
    }
}

/// Schema columns from an explicit template, the configured template, or
/// the built-in schema when the configured template does not exist.
pub fn resolve_columns(
    template: Option<&Path>,
    sheet: Option<&str>,
    config: &DevisConfig,
) -> anyhow::Result<Vec<String>> {
    let sheet = sheet.unwrap_or(&config.template.sheet);

    if let Some(path) = template {
        return Ok(devis_core::read_schema_columns(path, sheet)?);
    }

    let configured = &config.template.path;
    if configured.exists() {
        Ok(devis_core::read_schema_columns(configured, sheet)?)
    } else {
        warn!(
            "Template {} not found, using built-in columns",
            configured.display()
        );
        Ok(default_schema())
    }
}

/// Header names fit for one terminal line.
pub fn display_column(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Print page failures and warnings to stderr.
pub fn print_issues(report: &BatchReport) {
    for failure in &report.failures {
        eprintln!(
            "{} Page {}: {}",
            style("✗").red(),
            failure.page,
            failure.error
        );
    }
    for warning in &report.warnings {
        match warning.page {
            Some(page) => eprintln!("{} Page {}: {}", style("⚠").yellow(), page, warning.message),
            None => eprintln!("{} {}", style("⚠").yellow(), warning.message),
        }
    }
}
