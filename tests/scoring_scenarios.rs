// tests/scoring_scenarios.rs
//
// Concrete scenarios for the scoring core through the public API.

use article_readability::complexity::complexity_metrics;
use article_readability::pronouns::count_personal_pronouns;
use article_readability::readability::readability;
use article_readability::sentiment::sentiment_scores;
use article_readability::syllables::estimate_syllables;
use article_readability::{score_document, Lexicon, StopWords, TreebankTokenizer};

fn lexicon() -> Lexicon {
    Lexicon::from_words(["good"], ["bad"])
}

#[test]
fn sentiment_counts_example() {
    let s = sentiment_scores(&["good", "bad", "good", "the"], &lexicon());
    assert_eq!(s.positive_score, 2);
    assert_eq!(s.negative_score, 1);
    assert!((s.polarity - 0.333_333_333).abs() < 1e-6);
    assert!((s.subjectivity - 0.75).abs() < 1e-12);
}

#[test]
fn sentiment_empty_is_zero() {
    let empty: Vec<String> = Vec::new();
    let s = sentiment_scores(&empty, &lexicon());
    assert_eq!(
        (s.positive_score, s.negative_score, s.polarity, s.subjectivity),
        (0, 0, 0.0, 0.0)
    );
}

#[test]
fn syllables_are_at_least_one() {
    for w in ["", "a", "e", "the", "rhythm", "strengths", "x", "Queueing"] {
        assert!(estimate_syllables(w) >= 1, "{w}");
    }
    assert_eq!(estimate_syllables("move"), 1);
}

#[test]
fn stopword_only_complexity_is_zero() {
    let m = complexity_metrics(&["The", "of", "and", "!", "—"], &StopWords::english());
    assert_eq!(m.total_word_count, 0);
    assert_eq!(m.percentage_complex_words, 0.0);
    assert_eq!(m.average_syllables_per_word, 0.0);
    assert_eq!(m.average_word_length, 0.0);
}

#[test]
fn words_per_sentence_example() {
    let tokens: Vec<String> = (0..8).map(|i| format!("w{i}")).collect();
    let r = readability(
        &tokens,
        &["The cat sat.", "It ran far fast."],
        0.0,
        &TreebankTokenizer,
    );
    assert!((r.average_words_per_sentence - 4.0).abs() < 1e-12);
}

#[test]
fn pronoun_example() {
    assert_eq!(count_personal_pronouns(&["He", "gave", "her", "his", "book"]), 3);
}

#[test]
fn whole_document_uses_both_word_averages() {
    // 13 tokens overall, 4 + 9 per sentence
    let text = "Investors were optimistic. However, the bad quarter hurt them badly.";
    let lx = Lexicon::from_words(["optimistic"], ["bad", "hurt", "badly"]);
    let rec = score_document(text, &lx, &StopWords::english(), &TreebankTokenizer);

    assert_eq!(rec.positive_score, 1);
    assert_eq!(rec.negative_score, 3);
    assert!((rec.polarity_score + 0.5).abs() < 1e-12);
    assert!((rec.subjectivity_score - 4.0 / 13.0).abs() < 1e-12);
    assert_eq!(rec.personal_pronoun_count, 1);
    assert!((rec.avg_words_per_sentence - 6.5).abs() < 1e-12);
    assert!((rec.avg_sentence_length - 6.5).abs() < 1e-12);
    assert!(
        (rec.fog_index - 0.4 * (rec.avg_sentence_length + rec.percentage_complex_words)).abs()
            < 1e-12
    );
}
