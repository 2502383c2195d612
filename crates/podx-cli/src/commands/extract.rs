//! Extract command - pull structured data from a single purchase-order file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use podx_core::models::config::PodxConfig;
use podx_core::models::order::PurchaseOrder;
use podx_core::order::{OrderParser, PoParser, check_totals};
use podx_core::pdf::{PdfProcessor, PdfReader};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF, or already-extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Check row arithmetic and totals (advisory, printed to stderr)
    #[arg(long)]
    check: bool,

    /// Show extraction timing
    #[arg(long)]
    show_timing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Flat CSV output (header columns repeated per item row)
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("processing file: {}", args.input.display());

    let text = read_document_text(&args.input, &config)?;
    let result = PoParser::new().parse(&text);

    for warning in &result.warnings {
        debug!("{warning}");
    }

    if args.check || config.extraction.check_totals {
        let findings = check_totals(&result.order);
        if !findings.is_empty() {
            eprintln!("{}", style("Arithmetic check:").yellow());
            for finding in &findings {
                eprintln!("  - {finding}");
            }
        }
    }

    let output = format_order(&result.order, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    if args.show_timing {
        eprintln!(
            "{} Extraction: {}ms, total: {:?}",
            style("ℹ").blue(),
            result.processing_time_ms,
            start.elapsed()
        );
    }

    Ok(())
}

/// Load configuration from the given path, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PodxConfig> {
    Ok(match config_path {
        Some(path) => PodxConfig::from_file(Path::new(path))?,
        None => PodxConfig::default(),
    })
}

/// Read a document as flattened text, by extension: PDFs go through the
/// reader, `.txt` files are taken as already-extracted text.
pub fn read_document_text(input: &Path, config: &PodxConfig) -> anyhow::Result<String> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match extension.as_str() {
        "pdf" => {
            let data = fs::read(input)?;
            let mut reader = PdfReader::with_config(config.pdf.clone());
            reader.load(&data)?;
            debug!("PDF has {} pages", reader.page_count());
            reader.extract_text()?
        }
        "txt" | "text" => fs::read_to_string(input)?,
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    if text.trim().is_empty() {
        anyhow::bail!("No text could be extracted from {}", input.display());
    }

    Ok(text)
}

/// Render an order in the requested output format.
pub fn format_order(order: &PurchaseOrder, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(order)?),
        OutputFormat::Csv => format_csv(order),
        OutputFormat::Text => Ok(format_text(order)),
    }
}

const CSV_COLUMNS: [&str; 11] = [
    "po_number",
    "date",
    "supplier",
    "delivery_date",
    "grand_total",
    "vat",
    "product_code",
    "description",
    "quantity",
    "unit_price",
    "total_value",
];

/// Flat tabular shape: header-field columns repeat alongside the per-item
/// columns for every item row, or appear once with empty item columns when
/// no items were found.
fn format_csv(order: &PurchaseOrder) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_COLUMNS)?;

    let header = &order.header;
    let header_fields = [
        header.po_number.as_deref().unwrap_or(""),
        header.date.as_deref().unwrap_or(""),
        header.supplier.as_deref().unwrap_or(""),
        header.delivery_date.as_deref().unwrap_or(""),
        header.grand_total.as_deref().unwrap_or(""),
        header.vat.as_deref().unwrap_or(""),
    ];

    match order.products.as_deref() {
        Some(products) => {
            for product in products {
                let mut record: Vec<&str> = header_fields.to_vec();
                record.extend([
                    product.product_code.as_str(),
                    product.description.as_str(),
                    product.quantity.as_str(),
                    product.unit_price.as_str(),
                    product.total_value.as_str(),
                ]);
                wtr.write_record(&record)?;
            }
        }
        None => {
            let mut record: Vec<&str> = header_fields.to_vec();
            record.extend(["", "", "", "", ""]);
            wtr.write_record(&record)?;
        }
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(order: &PurchaseOrder) -> String {
    let mut output = String::new();
    let header = &order.header;

    let field = |label: &str, value: &Option<String>| match value {
        Some(v) => format!("{label}: {v}\n"),
        None => String::new(),
    };

    output.push_str(&field("P/O No", &header.po_number));
    output.push_str(&field("Date", &header.date));
    output.push_str(&field("Supplier", &header.supplier));
    output.push_str(&field("Delivery Date", &header.delivery_date));

    if let Some(products) = order.products.as_deref() {
        output.push_str(&format!("\nItems ({}):\n", products.len()));
        for product in products {
            output.push_str(&format!(
                "  {} {} - {} x {} = {}\n",
                product.product_code,
                product.description,
                product.quantity,
                product.unit_price,
                product.total_value
            ));
        }
    }

    if header.grand_total.is_some() || header.vat.is_some() {
        output.push('\n');
        output.push_str(&field("VAT", &header.vat));
        output.push_str(&field("Grand Total", &header.grand_total));
    }

    if output.is_empty() {
        output.push_str("No recognizable purchase-order data found.\n");
    }

    output
}
