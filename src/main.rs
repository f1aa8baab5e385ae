use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use kiln::operator::logged;
use kiln::operator::row::Row;
use kiln::operator::topic_model::TopicModelOperator;
use kiln::operator::traits::Operator;

/// Kiln: train an LDA topic model over a file of tokenized text.
///
/// Each line of the input file is one document: whitespace-delimited,
/// pre-tokenized. Prints one topic summary per discovered topic.
#[derive(Parser)]
#[command(name = "kiln", version, about)]
struct Cli {
    /// Newline-delimited tokenized text file, one document per line
    file: PathBuf,

    /// Number of topics to train (framework default: 5)
    #[arg(long)]
    num_topics: Option<usize>,

    /// Emit output rows as JSON lines instead of formatted text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kiln=info")),
        )
        .init();

    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    // The framework reserves the first operator argument; the optional
    // second one is the topic count.
    let mut args = vec!["kiln".to_string()];
    if let Some(n) = cli.num_topics {
        args.push(n.to_string());
    }

    let mut op = TopicModelOperator::new();
    logged("open", op.open(&args))?;

    let mut rows = 0usize;
    for line in text.lines() {
        logged("accept", op.accept(Row::single(line), 0))?;
        rows += 1;
    }
    info!(rows, "fed input rows");

    logged("input_exhausted", op.input_exhausted())?;

    let mut topic_idx = 0usize;
    while op.has_next() {
        let Some(row) = op.next() else { break };
        if cli.json {
            println!("{}", serde_json::to_string(&row)?);
        } else {
            println!("{} {}", format!("topic {topic_idx}:").bold().bright_green(), row.output);
        }
        topic_idx += 1;
    }

    logged("close", op.close())?;
    Ok(())
}
