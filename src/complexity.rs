//! # Complexity metrics
//! Word-level statistics over the *filtered* word list: tokens that are
//! purely alphabetic and not stop words. Punctuation, numbers and function
//! words never reach the syllable counter.

use serde::Serialize;

use crate::lexicon::StopWords;
use crate::syllables::estimate_syllables;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ComplexityMetrics {
    pub total_syllables: usize,
    pub total_word_count: usize,
    pub complex_word_count: usize,
    /// Fraction in `[0, 1]`, not a percentage.
    pub percentage_complex_words: f64,
    pub average_syllables_per_word: f64,
    pub average_word_length: f64,
}

/// Non-empty and every char alphabetic (Unicode aware).
#[inline]
pub fn is_alphabetic_word(tok: &str) -> bool {
    !tok.is_empty() && tok.chars().all(char::is_alphabetic)
}

/// Counts toward `total_word_count`.
#[inline]
pub fn is_countable(tok: &str, stopwords: &StopWords) -> bool {
    is_alphabetic_word(tok) && !stopwords.contains(tok)
}

pub fn complexity_metrics<S: AsRef<str>>(tokens: &[S], stopwords: &StopWords) -> ComplexityMetrics {
    let mut total_syllables = 0usize;
    let mut total_word_count = 0usize;
    let mut complex_word_count = 0usize;
    let mut total_chars = 0usize;

    for tok in tokens.iter().map(|t| t.as_ref()) {
        if !is_countable(tok, stopwords) {
            continue;
        }
        let syl = estimate_syllables(tok);
        total_word_count += 1;
        total_syllables += syl;
        total_chars += tok.chars().count();
        if syl > 2 {
            complex_word_count += 1;
        }
    }

    ComplexityMetrics {
        total_syllables,
        total_word_count,
        complex_word_count,
        percentage_complex_words: ratio(complex_word_count, total_word_count),
        average_syllables_per_word: ratio(total_syllables, total_word_count),
        average_word_length: ratio(total_chars, total_word_count),
    }
}

/// `num / den`, or 0 when `den == 0`.
#[inline]
pub(crate) fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_stopwords_and_punctuation_yield_zeros() {
        let sw = StopWords::english();
        let m = complexity_metrics(&["the", ",", "and", "IS", "42", "."], &sw);
        assert_eq!(m, ComplexityMetrics::default());
    }

    #[test]
    fn counts_filtered_words_only() {
        let sw = StopWords::english();
        // countable: Economic (4), growth (1), accelerated (5)
        let toks = ["The", "Economic", "growth", "accelerated", "in", "2024", "."];
        let m = complexity_metrics(&toks, &sw);
        assert_eq!(m.total_word_count, 3);
        assert_eq!(m.complex_word_count, 2);
        assert_eq!(m.total_syllables, 4 + 1 + 5);
        assert!((m.percentage_complex_words - 2.0 / 3.0).abs() < 1e-12);
        assert!((m.average_syllables_per_word - 10.0 / 3.0).abs() < 1e-12);
        // 8 + 6 + 11 chars of the original tokens
        assert!((m.average_word_length - 25.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn hyphenated_and_contracted_tokens_are_not_alphabetic() {
        assert!(!is_alphabetic_word("well-known"));
        assert!(!is_alphabetic_word("n't"));
        assert!(!is_alphabetic_word(""));
        assert!(is_alphabetic_word("naïve"));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        let m = complexity_metrics(&["café"], &StopWords::empty());
        assert!((m.average_word_length - 4.0).abs() < 1e-12);
    }
}
