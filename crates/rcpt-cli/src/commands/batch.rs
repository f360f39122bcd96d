//! Batch processing command for multiple receipt files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use rcpt_core::ExtractedReceipt;

use super::config::load_config;
use super::input::{InputKind, InputProcessor, InputSource, is_supported};
use super::output::{OutputFormat, format_receipt};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// How to read the input files
    #[arg(short = 'k', long, value_enum, default_value = "auto")]
    input_kind: InputKind,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    receipt: Option<ExtractedReceipt>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && is_supported(p, args.input_kind))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let output_dir = match &args.output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            Some(fs::canonicalize(dir)?)
        }
        None => None,
    };

    // Inputs are never overwritten, even when the output directory is the input directory.
    let mut taken: HashSet<PathBuf> = files
        .iter()
        .filter_map(|p| fs::canonicalize(p).ok())
        .collect();

    let needs_vision = files
        .iter()
        .any(|p| matches!(args.input_kind.resolve(p), Ok(InputSource::Image)));
    let processor = InputProcessor::new(&config, needs_vision)?;

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Files are processed one at a time; each image is one provider request.
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = processor.process(&path, args.input_kind).await;
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(extraction) => {
                results.push(ProcessResult {
                    path,
                    receipt: Some(extraction.receipt),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        receipt: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    overall_pb.abandon();
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.receipt.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    for result in &successful {
        let Some(receipt) = &result.receipt else {
            continue;
        };

        match &output_dir {
            Some(output_dir) => {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("receipt");
                let output_path =
                    unique_output_path(output_dir, output_name, args.format.extension(), &taken);

                let content = format_receipt(receipt, args.format, config.output.pretty_json)?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
                taken.insert(output_path);
            }
            None => {
                println!("{}", format_receipt(receipt, args.format, false)?);
            }
        }
    }

    if args.summary {
        let summary_path = output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
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

/// Output path for `stem` that avoids every path in `taken`.
///
/// Falls back to `<stem>.receipt.<ext>`, then `<stem>.receipt-2.<ext>` and so on.
fn unique_output_path(
    output_dir: &Path,
    stem: &str,
    extension: &str,
    taken: &HashSet<PathBuf>,
) -> PathBuf {
    let path = output_dir.join(format!("{}.{}", stem, extension));
    if !taken.contains(&path) {
        return path;
    }

    let mut n = 1;
    loop {
        let suffix = match n {
            1 => "receipt".to_string(),
            _ => format!("receipt-{}", n),
        };
        let path = output_dir.join(format!("{}.{}.{}", stem, suffix, extension));
        if !taken.contains(&path) {
            warn!("Output name taken, writing {} instead", path.display());
            return path;
        }
        n += 1;
    }
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "store_name",
        "trade_date",
        "total_amount",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time_ms = result.processing_time_ms.to_string();

        if let Some(receipt) = &result.receipt {
            let total = receipt.total_amount.to_string();
            wtr.write_record([
                filename,
                "success",
                receipt.store_name.as_str(),
                receipt.trade_date.as_str(),
                total.as_str(),
                time_ms.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                time_ms.as_str(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
