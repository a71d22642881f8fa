//! Batch processing command for multiple request text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use tracing::{debug, error};

use zayavka_core::{ExtractedRecord, HeuristicRequestParser, RequestParser};

use super::{load_config, open_store};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (text files, one request per file)
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON records
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Training store path override
    #[arg(long)]
    store: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    record: Option<ExtractedRecord>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
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

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let store = open_store(&config, args.store.as_deref())?;
    let parser = HeuristicRequestParser::new(store).with_config(config.extraction.clone());

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        debug!("processing {}", path.display());

        let result = match process_single_file(&path, &parser, &args) {
            Ok(record) => ProcessResult {
                path,
                record: Some(record),
                error: None,
            },
            Err(e) => {
                error!("failed to process {}: {e}", path.display());
                if !args.continue_on_error {
                    return Err(e);
                }
                ProcessResult {
                    path,
                    record: None,
                    error: Some(e.to_string()),
                }
            }
        };

        results.push(result);
    }

    if args.summary {
        let summary = build_summary(&results)?;
        if let Some(ref output_dir) = args.output_dir {
            let path = output_dir.join("summary.csv");
            fs::write(&path, summary)?;
            println!("{} Summary written to {}", style("✓").green(), path.display());
        } else {
            print!("{}", summary);
        }
    }

    let succeeded = results.iter().filter(|r| r.record.is_some()).count();
    let failed = results.len() - succeeded;

    println!(
        "{} Processed {} files in {:.1}s ({} ok, {} failed)",
        style("✓").green(),
        results.len(),
        start.elapsed().as_secs_f64(),
        succeeded,
        failed
    );

    Ok(())
}

fn process_single_file(
    path: &PathBuf,
    parser: &HeuristicRequestParser,
    args: &BatchArgs,
) -> anyhow::Result<ExtractedRecord> {
    let text = fs::read_to_string(path)?;
    let record = parser.parse(&text)?;

    if let Some(ref output_dir) = args.output_dir {
        let output_path = output_dir
            .join(path.file_stem().unwrap_or_default())
            .with_extension("json");
        fs::write(&output_path, serde_json::to_string_pretty(&record)?)?;
    } else {
        println!("{}: {}", path.display(), serde_json::to_string(&record)?);
    }

    Ok(record)
}

fn build_summary(results: &[ProcessResult]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["file", "bank", "loan", "rate", "status"])?;

    for result in results {
        let (bank, loan, rate) = match &result.record {
            Some(record) => (
                record.bank.clone(),
                record.loan.map(|v| v.to_string()).unwrap_or_default(),
                record.rate.map(|v| v.to_string()).unwrap_or_default(),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        let status = match &result.error {
            Some(e) => format!("error: {e}"),
            None => "ok".to_string(),
        };

        wtr.write_record([
            &result.path.display().to_string(),
            &bank,
            &loan,
            &rate,
            &status,
        ])?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}
