/// Word and sentence scoring by normalized term frequency.
///
/// Each content word gets:
///   score(w) = count(w) / max_v count(v)
/// and each sentence gets the sum of the scores of its words, or 0 when it
/// has `LONG_SENTENCE_WORDS` or more words.

use rayon::prelude::*;
use std::collections::HashMap;

use crate::error::{Result, SummaryError};
use crate::stopwords::StopwordSet;
use crate::tokenizer;

/// Sentences with at least this many raw words score 0.
pub const LONG_SENTENCE_WORDS: usize = 30;

/// Normalized importance of each distinct content word.
#[derive(Debug, Clone)]
pub struct WordFrequencyTable {
    /// Word → count / max count, in (0, 1]
    scores: HashMap<String, f64>,
    /// Highest raw count of any content word
    max_count: usize,
}

impl WordFrequencyTable {
    /// Score of `word`, or 0 if it is not a content word.
    pub fn get(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(w, s)| (w.as_str(), *s))
    }
}

/// A sentence with its score and its position in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Position among all sentences of the document
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Build the word frequency table from the word view.
///
/// Stopwords and single-character tokens are skipped. Fails with
/// [`SummaryError::NoScorableWords`] when nothing is left to normalize by.
pub fn score_words(words: &[String], stopwords: &StopwordSet) -> Result<WordFrequencyTable> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in words {
        if word.chars().count() > 1 && !stopwords.contains(word) {
            *counts.entry(word.clone()).or_insert(0) += 1;
        }
    }

    let max_count = counts
        .values()
        .copied()
        .max()
        .ok_or(SummaryError::NoScorableWords)?;

    let scores = counts
        .into_iter()
        .map(|(word, count)| (word, count as f64 / max_count as f64))
        .collect::<HashMap<_, _>>();

    tracing::debug!(
        distinct = scores.len(),
        max_count,
        "Built word frequency table"
    );
    Ok(WordFrequencyTable { scores, max_count })
}

/// Score every sentence against the table, in parallel.
///
/// Output order and `index` follow input order. No sentence is dropped.
pub fn score_sentences(sentences: Vec<String>, table: &WordFrequencyTable) -> Vec<ScoredSentence> {
    sentences
        .into_par_iter()
        .enumerate()
        .map(|(index, text)| {
            let score = score_sentence(&text, table);
            ScoredSentence { index, text, score }
        })
        .collect()
}

fn score_sentence(sentence: &str, table: &WordFrequencyTable) -> f64 {
    if tokenizer::raw_word_count(sentence) >= LONG_SENTENCE_WORDS {
        return 0.0;
    }

    tokenizer::tokenize(sentence)
        .iter()
        .map(|token| table.get(token))
        .sum()
}
