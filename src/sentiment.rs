//! # Sentiment Scorer
//! Lexicon hit counting over the full token sequence.
//!
//! Polarity and subjectivity deliberately use different denominators:
//! polarity divides by the number of lexicon hits, subjectivity by the
//! length of the *unfiltered* token sequence (punctuation included).

use serde::Serialize;

use crate::complexity::{is_alphabetic_word, ratio};
use crate::lexicon::Lexicon;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentScores {
    pub positive_score: usize,
    pub negative_score: usize,
    /// In `[-1, 1]`.
    pub polarity: f64,
    /// In `[0, 1]` unless a word sits in both lists.
    pub subjectivity: f64,
}

pub fn sentiment_scores<S: AsRef<str>>(tokens: &[S], lexicon: &Lexicon) -> SentimentScores {
    let mut positive_score = 0usize;
    let mut negative_score = 0usize;

    for tok in tokens.iter().map(|t| t.as_ref()) {
        if !is_alphabetic_word(tok) {
            continue;
        }
        let w = tok.to_lowercase();
        // a word listed in both sets counts on both sides
        if lexicon.is_positive(&w) {
            positive_score += 1;
        }
        if lexicon.is_negative(&w) {
            negative_score += 1;
        }
    }

    let hits = positive_score + negative_score;
    let polarity = if hits == 0 {
        0.0
    } else {
        (positive_score as f64 - negative_score as f64) / hits as f64
    };

    SentimentScores {
        positive_score,
        negative_score,
        polarity,
        subjectivity: ratio(hits, tokens.len()),
    }
}
