use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdf_summarizer::pdf::{PageRange, DEFAULT_LAST_PAGE};
use pdf_summarizer::pipeline::{self, Settings, DEFAULT_SUMMARY_SENTENCES};

/// pdf_summarizer — Summarize a PDF by picking its most important sentences.
///
/// Sentences are scored by the normalized frequency of their content words
/// and written, in reading order, to `<name>_Summary`.
#[derive(Parser)]
#[command(name = "pdf_summarizer")]
#[command(version = "0.1.0")]
#[command(about = "Write an extractive summary of a PDF document", long_about = None)]
struct Cli {
    /// Path to the PDF file to summarize
    #[arg(value_name = "FILE_PATH")]
    file_path: PathBuf,

    /// Number of sentences in the summary
    #[arg(short = 'n', long, default_value_t = DEFAULT_SUMMARY_SENTENCES)]
    sentences: usize,

    /// First page to extract (0-indexed, inclusive)
    #[arg(long, default_value_t = 0)]
    start_page: usize,

    /// Last page to extract (0-indexed, inclusive)
    #[arg(long, default_value_t = DEFAULT_LAST_PAGE)]
    end_page: usize,
}

fn run(cli: Cli) -> Result<()> {
    let range = PageRange::new(cli.start_page, cli.end_page)?;
    let settings = Settings::from_env();

    pipeline::summarize_document(&cli.file_path, cli.sentences, range, &settings)
        .with_context(|| format!("Failed to summarize '{}'", cli.file_path.display()))?;
    Ok(())
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pdf_summarizer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}
