use pdf_summarizer::scoring::{self, LONG_SENTENCE_WORDS};
use pdf_summarizer::tokenizer;
use pdf_summarizer::{summarize, StopwordSet, SummaryError};

const ARTICLE: &str = "Rust is a systems programming language. \
    Memory safety in Rust comes from ownership and borrowing. \
    The weather was pleasant yesterday. \
    Ownership rules are checked by the Rust compiler at compile time. \
    Many developers enjoy writing Rust for its safety guarantees.";

fn lines(text: &str, k: usize) -> Vec<String> {
    summarize(text, k)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_scenario_highest_density_sentence() {
    let text = "The cat sat. The cat sat on the mat. Dogs bark loudly at cats.";
    assert_eq!(lines(text, 1), vec!["The cat sat on the mat."]);
}

#[test]
fn test_scenario_duplicate_sentences_keep_earliest_positions() {
    let text = "The quick fox jumps over walls. The quick fox jumps over walls. The quick fox jumps over walls.";
    let summary = summarize(text, 2).unwrap();

    assert_eq!(summary.len(), 2);
    let indices: Vec<usize> = summary.sentences().iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1]);
    assert!(summary
        .lines()
        .all(|l| l == "The quick fox jumps over walls."));
}

#[test]
fn test_scenario_count_exceeds_sentences() {
    let summary = summarize(ARTICLE, 100).unwrap();

    assert_eq!(summary.len(), 5);
    assert!(summary.is_truncated());
    let expected = tokenizer::sentence_view(ARTICLE);
    assert_eq!(summary.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_scenario_only_stopwords() {
    let result = summarize("The and, of; it is! A the? Was.", 3);
    assert!(matches!(result, Err(SummaryError::NoScorableWords)));
}

#[test]
fn test_empty_document() {
    assert!(matches!(summarize("", 1), Err(SummaryError::EmptyInput)));
    assert!(matches!(summarize("!!! ??? 42", 1), Err(SummaryError::EmptyInput)));
}

#[test]
fn test_deterministic() {
    assert_eq!(summarize(ARTICLE, 3).unwrap(), summarize(ARTICLE, 3).unwrap());
}

#[test]
fn test_order_preserved() {
    for k in 1..=5 {
        let summary = summarize(ARTICLE, k).unwrap();
        let indices: Vec<usize> = summary.sentences().iter().map(|s| s.index).collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "k={}: {:?}", k, indices);
    }
}

#[test]
fn test_cardinality() {
    for k in 1..=8 {
        assert_eq!(summarize(ARTICLE, k).unwrap().len(), k.min(5));
    }
}

#[test]
fn test_rust_sentences_beat_weather() {
    let picked = lines(ARTICLE, 4);
    assert!(!picked.contains(&"The weather was pleasant yesterday.".to_string()));
}

#[test]
fn test_long_sentence_is_penalized() {
    let long = format!("{}.", vec!["rust"; LONG_SENTENCE_WORDS].join(" "));
    let text = format!("{} Rust is good.", long);

    let summary = summarize(&text, 1).unwrap();
    assert_eq!(summary.lines().collect::<Vec<_>>(), vec!["Rust is good."]);

    let tokens = tokenizer::tokenize_document(&text).unwrap();
    let table = scoring::score_words(&tokens.words, StopwordSet::english()).unwrap();
    let scored = scoring::score_sentences(tokens.sentences, &table);
    assert_eq!(scored[0].score, 0.0);
    assert!(scored[1].score > 0.0);
}

#[test]
fn test_cid_artifacts_carry_no_weight() {
    let text = "(cid:3)(cid:4)(cid:5) (cid:6). Graphs have vertices. Graphs have edges too.";
    let tokens = tokenizer::tokenize_document(text).unwrap();
    let table = scoring::score_words(&tokens.words, StopwordSet::english()).unwrap();
    assert!(!table.contains("cid"));

    let scored = scoring::score_sentences(tokens.sentences, &table);
    assert_eq!(scored[0].score, 0.0);
}

#[test]
fn test_normalization_bounds() {
    let tokens = tokenizer::tokenize_document(ARTICLE).unwrap();
    let table = scoring::score_words(&tokens.words, StopwordSet::english()).unwrap();

    assert!(table.iter().all(|(_, s)| s > 0.0 && s <= 1.0));
    assert_eq!(table.get("rust"), 1.0);
    assert!(table.iter().all(|(w, _)| !StopwordSet::english().contains(w)));
}
