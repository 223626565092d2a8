//! Columns command - list the schema columns.

use std::path::PathBuf;

use clap::Args;
use console::style;

use devis_core::models::columns::is_known;

use super::{display_column, load_config, resolve_columns};

/// Arguments for the columns command.
#[derive(Args)]
pub struct ColumnsArgs {
    /// Template workbook holding the header row
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Template sheet name
    #[arg(long)]
    sheet: Option<String>,

    /// Print the exact names as a JSON array
    #[arg(long)]
    json: bool,
}

pub fn run(args: ColumnsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let columns = resolve_columns(args.template.as_deref(), args.sheet.as_deref(), &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&columns)?);
        return Ok(());
    }

    for (i, column) in columns.iter().enumerate() {
        if is_known(column) {
            println!("{:>3}  {}", i + 1, display_column(column));
        } else {
            println!(
                "{:>3}  {} {}",
                i + 1,
                display_column(column),
                style("(left empty)").dim()
            );
        }
    }

    Ok(())
}
