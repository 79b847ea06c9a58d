// tests/parallel_scoring.rs
//
// Shared frozen Scorer: parallel results must equal sequential ones, and a
// custom tokenizer plugs in without touching the metrics.

use std::sync::Arc;
use std::thread;

use article_readability::{Lexicon, Scorer, StopWords, Tokenizer};

fn scorer() -> Scorer {
    Scorer::new(
        Lexicon::from_words(["gain", "improve", "success"], ["loss", "fail", "crisis"]),
        StopWords::english(),
    )
}

fn docs() -> Vec<String> {
    (0..32)
        .map(|i| {
            format!(
                "Document {i} reports a gain. The crisis may deepen, yet analysts expect \
                 success within {i} quarters. They said it would improve considerably."
            )
        })
        .collect()
}

#[test]
fn parallel_equals_sequential() {
    let s = scorer();
    let docs = docs();
    let sequential: Vec<_> = docs.iter().map(|d| s.score(d)).collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = docs
            .iter()
            .map(|d| {
                let s = s.clone();
                scope.spawn(move || s.score(d))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
    assert!(sequential.iter().all(|r| r.positive_score == 3));
}

/// Whitespace words, one sentence per line.
struct LineTokenizer;

impl Tokenizer for LineTokenizer {
    fn words(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
    fn sentences(&self, text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[test]
fn custom_tokenizer_drives_every_metric() {
    let s = Scorer::with_tokenizer(
        Lexicon::from_words(["good"], ["bad"]),
        StopWords::english(),
        Arc::new(LineTokenizer),
    );
    // "good," is not alphabetic for this tokenizer
    let rec = s.score("good, bad\n\ngood news today");
    assert_eq!(rec.positive_score, 1);
    assert_eq!(rec.negative_score, 1);
    assert!((rec.avg_words_per_sentence - 2.5).abs() < 1e-12);
    assert!((rec.avg_sentence_length - 2.5).abs() < 1e-12);
}
