use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pdf::{self, PageRange};
use crate::sink;
use crate::summarizer::Summarizer;

/// Sentence count used when the caller does not ask for one.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 25;

/// Environment-derived settings for a summarization run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory the summary file is written into
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Reads `SUMMARY_OUTPUT_DIR`, defaulting to the current directory.
    pub fn from_env() -> Self {
        let output_dir = std::env::var("SUMMARY_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        Self { output_dir }
    }
}

/// Summarizes a PDF into a text file in the configured output directory.
///
/// Pipeline: Extract text → Summarize → Write one sentence per line.
pub fn summarize_document(
    path: &Path,
    target: usize,
    range: PageRange,
    settings: &Settings,
) -> Result<PathBuf> {
    println!(
        "  Extracting text from: {} (pages {}-{})",
        path.display(),
        range.start,
        range.end
    );
    let text = pdf::extract_text(path, range)?;
    println!("  Extracted {} characters.", text.len());

    println!("  Selecting the {} highest-scoring sentences...", target);
    let summary = Summarizer::new().summarize(&text, target)?;
    if summary.is_truncated() {
        println!(
            "  Document has only {} sentences; keeping all of them.",
            summary.available()
        );
    }

    let output = sink::write_summary(&summary, path, &settings.output_dir)?;
    println!(
        "  Wrote {} sentences to '{}'.",
        summary.len(),
        output.display()
    );
    tracing::info!(
        source = %path.display(),
        output = %output.display(),
        sentences = summary.len(),
        "Summary complete"
    );

    Ok(output)
}
