use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Failed to extract text from '{}': {}", .path.display(), .reason)]
    DocumentExtraction { path: PathBuf, reason: String },

    #[error("Input contains no extractable words or sentences")]
    EmptyInput,

    #[error("Zero scorable words remain after stopword and length filtering")]
    NoScorableWords,

    #[error("Invalid target sentence count: {0} (must be at least 1)")]
    InvalidTargetCount(usize),

    #[error("Invalid page range: start {start} is after end {end}")]
    InvalidPageRange { start: usize, end: usize },

    #[error("Failed to write summary to '{}': {}", .path.display(), .source)]
    SummaryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SummaryError>;
