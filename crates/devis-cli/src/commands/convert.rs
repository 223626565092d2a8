//! Convert command - fill the table from a single quote PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use devis_core::pdf::{PdfExtractor, PdfProcessor};
use devis_core::quote::rules::format_french_amount;
use devis_core::{write_table, DevisConfig, FieldValue, QuoteConverter, Table, TableFormat};

use super::{display_column, load_config, print_issues, resolve_columns, FormatArg, OverrideArgs};

/// Arguments for the convert command.
#[derive(Args)]
pub struct ConvertArgs {
    /// Input quote PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Template workbook holding the header row
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Template sheet name
    #[arg(long)]
    sheet: Option<String>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from the output extension, then config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Print the first N rows
    #[arg(long, default_value = "0")]
    preview: usize,

    #[command(flatten)]
    overrides: OverrideArgs,
}

pub fn run(args: ConvertArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    args.overrides.apply(&mut config);

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    // Resolve the schema before reading the PDF so a bad template fails fast.
    let columns = resolve_columns(args.template.as_deref(), args.sheet.as_deref(), &config)?;
    let (output, format) = output_target(args.output.as_deref(), args.format, &config);

    info!("Converting {}", args.input.display());

    let data = fs::read(&args.input)?;
    let extractor = PdfExtractor::from_bytes(&data)?;
    let page_count = extractor.page_count();
    println!(
        "{} {} pages detected in {}",
        style("ℹ").blue(),
        page_count,
        args.input.display()
    );

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );
    pb.enable_steady_tick(Duration::from_millis(120));

    pb.set_message("Extracting text...");
    pb.set_position(10);
    let pages = extractor.extract_pages().inspect_err(|_| pb.abandon())?;

    pb.set_message("Parsing pages...");
    pb.set_position(70);
    let report = QuoteConverter::new(&config).convert(pages);

    pb.set_message("Writing table...");
    pb.set_position(90);
    let table = report.table(&columns);
    let written = write_table(&table, &output, format, &config.output.sheet);
    pb.finish_and_clear();
    written?;

    println!(
        "{} {} rows written to {}",
        style("✓").green(),
        table.row_count(),
        output.display()
    );
    if !report.failures.is_empty() {
        println!(
            "   {} of {} pages could not be read",
            style(report.failures.len()).red(),
            report.page_count
        );
    }
    print_issues(&report);

    if args.preview > 0 {
        print_preview(&table, args.preview);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Output path and format from the flags, falling back to the config.
pub fn output_target(
    output: Option<&Path>,
    format: Option<FormatArg>,
    config: &DevisConfig,
) -> (PathBuf, TableFormat) {
    let format = format
        .map(TableFormat::from)
        .or_else(|| output.and_then(TableFormat::from_path))
        .unwrap_or(config.output.format);

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(&config.output.file_name).with_extension(format.extension()),
    };

    (path, format)
}

fn print_preview(table: &Table, rows: usize) {
    for (i, row) in table.rows.iter().take(rows).enumerate() {
        println!();
        println!("{}", style(format!("Row {}", i + 1)).bold());
        for (column, value) in table.columns.iter().zip(row) {
            if value.is_blank() {
                continue;
            }
            let shown = match value {
                FieldValue::Decimal(amount) => format!("{} €", format_french_amount(*amount)),
                other => other.to_string(),
            };
            println!("  {}: {}", style(display_column(column)).dim(), shown);
        }
    }
}
