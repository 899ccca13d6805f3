/// Top-K sentence selection with reading-order restoration.

use crate::scoring::ScoredSentence;

/// The selected sentences of a document, in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    sentences: Vec<ScoredSentence>,
    /// Sentence count asked for
    requested: usize,
    /// Sentence count the document had
    available: usize,
}

impl Summary {
    pub fn sentences(&self) -> &[ScoredSentence] {
        &self.sentences
    }

    /// Sentence texts, in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn available(&self) -> usize {
        self.available
    }

    /// True when fewer sentences were returned than requested.
    pub fn is_truncated(&self) -> bool {
        self.requested > self.available
    }
}

/// Keep the `k` highest-scoring sentences and return them in document order.
///
/// Ties go to the earlier sentence. If `k` exceeds the number of sentences,
/// all of them are returned.
pub fn select_top_k(mut scored: Vec<ScoredSentence>, k: usize) -> Summary {
    let available = scored.len();
    if k > available {
        tracing::warn!(
            requested = k,
            available,
            "Requested more sentences than the document has, returning all"
        );
    }

    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
    scored.truncate(k);
    scored.sort_by_key(|s| s.index);

    Summary {
        sentences: scored,
        requested: k,
        available,
    }
}
