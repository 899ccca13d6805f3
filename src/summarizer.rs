/// Extractive summarization pipeline.
///
/// Tokenize → score words → score sentences → select top K. Each call is
/// independent; the only shared state is the read-only stopword set.

use crate::error::{Result, SummaryError};
use crate::scoring;
use crate::selector::{self, Summary};
use crate::stopwords::StopwordSet;
use crate::tokenizer;

/// Summarizes raw text against a fixed stopword set.
#[derive(Debug, Clone, Copy)]
pub struct Summarizer<'a> {
    stopwords: &'a StopwordSet,
}

impl Default for Summarizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer<'static> {
    /// Summarizer using the shared English stopwords.
    pub fn new() -> Self {
        Self {
            stopwords: StopwordSet::english(),
        }
    }
}

impl<'a> Summarizer<'a> {
    pub fn with_stopwords(stopwords: &'a StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Select the `target` most important sentences of `raw`, in reading order.
    ///
    /// Returns the first error of any stage; no partial summary is produced.
    pub fn summarize(&self, raw: &str, target: usize) -> Result<Summary> {
        if target == 0 {
            return Err(SummaryError::InvalidTargetCount(target));
        }

        let tokens = tokenizer::tokenize_document(raw)?;
        let table = scoring::score_words(&tokens.words, self.stopwords)?;
        let scored = scoring::score_sentences(tokens.sentences, &table);
        let summary = selector::select_top_k(scored, target);

        tracing::debug!(
            selected = summary.len(),
            available = summary.available(),
            "Summarized text"
        );
        Ok(summary)
    }
}

/// Summarize with the shared English stopwords.
pub fn summarize(raw: &str, target: usize) -> Result<Summary> {
    Summarizer::new().summarize(raw, target)
}
