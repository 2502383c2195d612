//! Batch command - process many purchase-order files.
//!
//! Extraction is a pure computation with no shared state, so files are
//! processed concurrently on blocking worker threads, bounded by `--jobs`.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use podx_core::models::config::PodxConfig;
use podx_core::models::order::PurchaseOrder;
use podx_core::order::{OrderParser, PoParser};

use super::extract::{OutputFormat, format_order, load_config, read_document_text};

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
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    order: Option<PurchaseOrder>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt" | "text")
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

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Spawn one bounded worker per file; results keep the input order
    // because handles are awaited in spawn order.
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut handles = Vec::with_capacity(files.len());

    for path in files {
        let semaphore = Arc::clone(&semaphore);
        let config = config.clone();

        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
            tokio::task::spawn_blocking(move || process_single_file(path, &config))
                .await
                .expect("worker panicked")
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle.await?;

        if let Some(error) = &result.error {
            if args.continue_on_error {
                warn!("failed to process {}: {error}", result.path.display());
            } else {
                pb.abandon();
                anyhow::bail!("Processing failed for {}: {error}", result.path.display());
            }
        }

        pb.inc(1);
        results.push(result);
    }

    pb.finish_with_message("Complete");

    // Write per-file outputs
    for result in &results {
        if let (Some(order), Some(output_dir)) = (&result.order, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("order");

            let output_path =
                output_dir.join(format!("{output_name}.{}", args.format.extension()));
            fs::write(&output_path, format_order(order, args.format)?)?;
            debug!("wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
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

    let successful = results.iter().filter(|r| r.order.is_some()).count();
    let failed = results.len() - successful;

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed).red()
    );

    if failed > 0 {
        println!();
        println!("{}", style("Failed files:").red());
        for result in results.iter().filter(|r| r.error.is_some()) {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(path: PathBuf, config: &PodxConfig) -> FileResult {
    let start = Instant::now();

    let order = read_document_text(&path, config).map(|text| PoParser::new().parse(&text).order);
    let processing_time_ms = start.elapsed().as_millis() as u64;

    match order {
        Ok(order) => FileResult {
            path,
            order: Some(order),
            error: None,
            processing_time_ms,
        },
        Err(e) => FileResult {
            path,
            order: None,
            error: Some(e.to_string()),
            processing_time_ms,
        },
    }
}

/// One row per input file: extraction status, the header fields, and the
/// item count.
fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "file",
        "status",
        "po_number",
        "date",
        "supplier",
        "delivery_date",
        "grand_total",
        "vat",
        "products",
        "time_ms",
        "error",
    ])?;

    for result in results {
        let file = result.path.display().to_string();
        let time_ms = result.processing_time_ms.to_string();

        match &result.order {
            Some(order) => {
                let header = &order.header;
                let product_count = order.product_count().to_string();
                wtr.write_record([
                    file.as_str(),
                    "ok",
                    header.po_number.as_deref().unwrap_or(""),
                    header.date.as_deref().unwrap_or(""),
                    header.supplier.as_deref().unwrap_or(""),
                    header.delivery_date.as_deref().unwrap_or(""),
                    header.grand_total.as_deref().unwrap_or(""),
                    header.vat.as_deref().unwrap_or(""),
                    product_count.as_str(),
                    time_ms.as_str(),
                    "",
                ])?;
            }
            None => {
                wtr.write_record([
                    file.as_str(),
                    "error",
                    "",
                    "",
                    "",
                    "",
                    "",
                    "",
                    "",
                    time_ms.as_str(),
                    result.error.as_deref().unwrap_or("unknown error"),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
