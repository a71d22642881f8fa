//! Parse command - extract structured data from a single request text.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use zayavka_core::{ExtractedRecord, HeuristicRequestParser};

use super::{load_config, open_store, ReadOnlyStore};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Request text (reads stdin when neither this nor --file is given)
    text: Option<String>,

    /// Read request text from a file
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Training store path override
    #[arg(long)]
    store: Option<PathBuf>,

    /// Do not append this request to the training store
    #[arg(long)]
    no_learn: bool,

    /// Show processing time
    #[arg(long)]
    show_timing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(&args)?;

    let store = open_store(&config, args.store.as_deref())?;
    info!("using training store at {}", store.path().display());

    let (record, elapsed_ms) = if args.no_learn {
        HeuristicRequestParser::new(Arc::new(ReadOnlyStore(store)))
            .with_config(config.extraction.clone())
            .parse_timed(&text)?
    } else {
        HeuristicRequestParser::new(store)
            .with_config(config.extraction.clone())
            .parse_timed(&text)?
    };

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_timing {
        println!();
        println!("{} Processing time: {}ms", style("ℹ").blue(), elapsed_ms);
    }

    Ok(())
}

fn read_input(args: &ParseArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

pub fn format_record(record: &ExtractedRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => format_text(record),
    }
}

/// Serde label of a unit enum value ("male", "apartment", ...).
fn enum_label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

fn opt_label<T: Serialize>(value: &Option<T>) -> String {
    value.as_ref().map(enum_label).unwrap_or_default()
}

fn insurance_labels(record: &ExtractedRecord) -> String {
    record
        .insurance
        .iter()
        .map(enum_label)
        .collect::<Vec<_>>()
        .join(";")
}

fn format_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "bank",
        "loan",
        "rate",
        "gender",
        "birth",
        "prop_type",
        "material",
        "year",
        "insurance",
    ])?;

    wtr.write_record([
        &record.bank,
        &record.loan.map(|v| v.to_string()).unwrap_or_default(),
        &record.rate.map(|v| v.to_string()).unwrap_or_default(),
        &opt_label(&record.gender),
        &record.birth,
        &opt_label(&record.prop_type),
        &opt_label(&record.material),
        &record.year.map(|v| v.to_string()).unwrap_or_default(),
        &insurance_labels(record),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "Bank:      {}\n",
        if record.bank.is_empty() { "-" } else { &record.bank }
    ));
    if let Some(loan) = record.loan {
        output.push_str(&format!("Loan:      {} RUB\n", loan));
    }
    if let Some(rate) = record.rate {
        output.push_str(&format!("Rate:      {}%\n", rate));
    }
    if !record.birth.is_empty() {
        output.push_str(&format!("Birth:     {}\n", record.birth));
    }
    if record.gender.is_some() {
        output.push_str(&format!("Gender:    {}\n", opt_label(&record.gender)));
    }
    if record.prop_type.is_some() {
        output.push_str(&format!("Property:  {}\n", opt_label(&record.prop_type)));
    }
    if record.material.is_some() {
        output.push_str(&format!("Material:  {}\n", opt_label(&record.material)));
    }
    if let Some(year) = record.year {
        output.push_str(&format!("Year:      {}\n", year));
    }
    if !record.insurance.is_empty() {
        output.push_str(&format!(
            "Insurance: {}\n",
            insurance_labels(record).replace(';', ", ")
        ));
    }

    Ok(output)
}
