//! Batch command - convert several quote PDFs, one table per file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use devis_core::{convert_pdf, write_table, DevisConfig, TableFormat};

use super::{load_config, resolve_columns, FormatArg, OverrideArgs};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Template workbook holding the header row
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Template sheet name
    #[arg(long)]
    sheet: Option<String>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    #[command(flatten)]
    overrides: OverrideArgs,
}

/// Result of converting a single file.
struct FileResult {
    path: PathBuf,
    output: Option<PathBuf>,
    pages: usize,
    failed_pages: usize,
    warnings: usize,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    args.overrides.apply(&mut config);

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let columns = resolve_columns(args.template.as_deref(), args.sheet.as_deref(), &config)?;
    let format = args.format.map(TableFormat::from).unwrap_or(config.output.format);
    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let file_start = Instant::now();
        let output_path = output_dir.join(output_name(&path, format));
        let result = convert_file(&path, &output_path, &columns, format, &config);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok((pages, failed_pages, warnings)) => results.push(FileResult {
                path,
                output: Some(output_path),
                pages,
                failed_pages,
                warnings,
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        output: None,
                        pages: 0,
                        failed_pages: 0,
                        warnings: 0,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_path = output_dir.join("summary.csv");
        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// `<stem>.<ext>` for an input PDF.
fn output_name(input: &Path, format: TableFormat) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("devis");
    format!("{}.{}", stem, format.extension())
}

/// Convert one PDF; returns page, failed page and warning counts.
fn convert_file(
    path: &Path,
    output: &Path,
    columns: &[String],
    format: TableFormat,
    config: &DevisConfig,
) -> anyhow::Result<(usize, usize, usize)> {
    let data = fs::read(path)?;
    let report = convert_pdf(&data, config)?;
    let table = report.table(columns);
    write_table(&table, output, format, &config.output.sheet)?;
    debug!("Wrote output to {}", output.display());

    Ok((report.page_count, report.failures.len(), report.warnings.len()))
}

/// One line of `summary.csv`.
#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: &'static str,
    pages: usize,
    failed_pages: usize,
    warnings: usize,
    output: Option<String>,
    processing_time_ms: u64,
    error: Option<&'a str>,
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        wtr.serialize(SummaryRow {
            filename: result
                .path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(""),
            status: if result.error.is_some() { "error" } else { "success" },
            pages: result.pages,
            failed_pages: result.failed_pages,
            warnings: result.warnings,
            output: result.output.as_ref().map(|p| p.display().to_string()),
            processing_time_ms: result.processing_time_ms,
            error: result.error.as_deref(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
