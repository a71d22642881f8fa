//! Training command - inspect the append-only training store.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use zayavka_core::TrainingStore;

use super::{load_config, open_store};

/// Arguments for the training command.
#[derive(Args)]
pub struct TrainingArgs {
    /// Training store path override
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: TrainingCommand,
}

#[derive(Subcommand)]
enum TrainingCommand {
    /// Show store statistics
    Stats,

    /// Show the most recent examples
    Tail {
        /// Number of examples to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

pub async fn run(args: TrainingArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config, args.store.as_deref())?;

    match args.command {
        TrainingCommand::Stats => stats(&*store),
        TrainingCommand::Tail { count } => tail(&*store, count),
    }
}

fn stats(store: &dyn TrainingStore) -> anyhow::Result<()> {
    let examples = store.load_all()?;
    let lenders = store.known_lenders()?;

    println!("Examples:        {}", examples.len());
    println!("Learned lenders: {}", lenders.len());
    if !lenders.is_empty() {
        println!("  {}", lenders.join(", "));
    }

    if let (Some(first), Some(last)) = (examples.first(), examples.last()) {
        println!("First example:   {}", first.ts);
        println!("Last example:    {}", last.ts);
    }

    // The store only ever grows; make that visible instead of hiding it.
    if examples.len() > 10_000 {
        println!(
            "{} Store holds {} examples and is never compacted.",
            style("ℹ").blue(),
            examples.len()
        );
    }

    Ok(())
}

fn tail(store: &dyn TrainingStore, count: usize) -> anyhow::Result<()> {
    let examples = store.load_all()?;
    let skip = examples.len().saturating_sub(count);

    for example in &examples[skip..] {
        println!("{}", serde_json::to_string(example)?);
    }

    Ok(())
}
