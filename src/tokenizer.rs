/// Word and sentence tokenization for frequency-based summarization.
///
/// Both views are derived from the same raw text. The sentence view keeps
/// `.` and `;` so boundaries survive; the word view keeps ASCII letters only.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Result, SummaryError};
use crate::stopwords::StopwordSet;

/// Abbreviations whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "vs", "etc", "e.g", "i.e", "fig", "st", "jr", "sr", "inc",
    "ltd",
];

static NON_LETTER_RE: OnceLock<Regex> = OnceLock::new();
static NON_SENTENCE_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

fn non_letter_re() -> &'static Regex {
    NON_LETTER_RE.get_or_init(|| Regex::new(r"[^a-zA-Z]").expect("non-letter regex"))
}

fn non_sentence_re() -> &'static Regex {
    NON_SENTENCE_RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9.;]").expect("non-sentence regex"))
}

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"))
}

/// Both tokenized views of one document.
#[derive(Debug, Clone)]
pub struct Tokens {
    /// Lowercase alphabetic words, in reading order.
    pub words: Vec<String>,
    /// Sentences, in reading order.
    pub sentences: Vec<String>,
}

/// Tokenize a document into its word and sentence views.
///
/// Fails with [`SummaryError::EmptyInput`] if the text is blank or yields
/// no words or no sentences.
pub fn tokenize_document(raw: &str) -> Result<Tokens> {
    if raw.trim().is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    let words = word_view(raw);
    let sentences = sentence_view(raw);
    if words.is_empty() || sentences.is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    tracing::debug!(
        words = words.len(),
        sentences = sentences.len(),
        "Tokenized document"
    );
    Ok(Tokens { words, sentences })
}

/// Replace everything but ASCII letters with spaces, lowercase, split into words.
pub fn word_view(raw: &str) -> Vec<String> {
    non_letter_re()
        .replace_all(raw, " ")
        .split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect()
}

/// Replace everything but letters, digits, `.` and `;` with spaces, collapse
/// whitespace, then split into sentences.
pub fn sentence_view(raw: &str) -> Vec<String> {
    let kept = non_sentence_re().replace_all(raw, " ");
    let collapsed = whitespace_re().replace_all(&kept, " ");
    split_sentences(collapsed.trim())
}

/// Split cleaned text into sentences at terminal periods.
///
/// A word ending in `.` closes the sentence unless it is a known abbreviation,
/// an initial followed by a name, or the next word starts lowercase. Sentences without any
/// letter or digit are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (i, &word) in words.iter().enumerate() {
        current.push(word);
        if ends_sentence(word, words.get(i + 1).copied()) {
            push_sentence(&mut sentences, &current);
            current.clear();
        }
    }
    push_sentence(&mut sentences, &current);

    sentences
}

fn push_sentence(sentences: &mut Vec<String>, words: &[&str]) {
    if words
        .iter()
        .any(|w| w.chars().any(|c| c.is_ascii_alphanumeric()))
    {
        sentences.push(words.join(" "));
    }
}

fn ends_sentence(word: &str, next: Option<&str>) -> bool {
    if !word.ends_with('.') {
        return false;
    }

    let stem = word.trim_end_matches('.');
    if is_abbreviation(stem) {
        return false;
    }

    match next {
        None => true,
        Some(next) if next.starts_with(|c: char| c.is_lowercase()) => false,
        Some(next) => !is_initial(stem) || opens_sentence(next),
    }
}

fn is_abbreviation(stem: &str) -> bool {
    ABBREVIATIONS.contains(&stem.to_ascii_lowercase().as_str())
}

fn is_initial(stem: &str) -> bool {
    let mut chars = stem.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_uppercase()
    )
}

/// A capitalized function word ("Then", "Is") after a lone capital starts a
/// new sentence; anything else ("J. Doe") is read as a name.
fn opens_sentence(next: &str) -> bool {
    let word = next.trim_end_matches(['.', ';']).to_ascii_lowercase();
    StopwordSet::english().contains(&word)
}

/// Tokenize one sentence into lowercase words for scoring.
///
/// Splits on whitespace and `;`, and strips surrounding periods so that
/// `"mat."` scores as `"mat"`.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| c.is_whitespace() || c == ';')
        .map(|s| s.trim_matches('.'))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Count whitespace-delimited words, punctuation included.
pub fn raw_word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}
