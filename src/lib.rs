//! Extractive PDF summarization by normalized word frequency.

pub mod error;
pub mod pdf;
pub mod pipeline;
pub mod scoring;
pub mod selector;
pub mod sink;
pub mod stopwords;
pub mod summarizer;
pub mod tokenizer;

pub use error::{Result, SummaryError};
pub use pdf::PageRange;
pub use scoring::{ScoredSentence, WordFrequencyTable};
pub use selector::Summary;
pub use stopwords::StopwordSet;
pub use summarizer::{summarize, Summarizer};
