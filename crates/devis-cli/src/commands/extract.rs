//! Extract command - run the engine on one page of plain text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use devis_core::QuoteConverter;

use super::{load_config, print_issues, OverrideArgs};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Page text file, or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Print only non-empty fields
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    overrides: OverrideArgs,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    args.overrides.apply(&mut config);

    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.input)?
    };

    let report = QuoteConverter::new(&config).convert_texts(&[text]);
    let Some(record) = report.records.first() else {
        anyhow::bail!("No record produced");
    };

    let mut json = serde_json::to_value(record)?;
    if args.compact {
        if let Some(fields) = json.as_object_mut() {
            fields.retain(|_, v| !(v.is_null() || v.as_str() == Some("")));
        }
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    print_issues(&report);

    Ok(())
}
