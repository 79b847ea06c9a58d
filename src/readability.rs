//! # Readability Scorer
//! Sentence-level averages and the Gunning-Fog approximation.
//!
//! Two "words per sentence" figures are produced on purpose:
//! - `average_sentence_length` re-tokenizes every sentence on its own and
//!   sums the per-sentence counts
//! - `average_words_per_sentence` divides the whole-document token count
//!
//! They diverge whenever sentence-level and whole-text tokenization disagree,
//! and both are reported.

use serde::Serialize;

use crate::complexity::ratio;
use crate::tokenize::Tokenizer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Readability {
    pub average_sentence_length: f64,
    pub fog_index: f64,
    pub average_words_per_sentence: f64,
}

/// Sum of per-sentence token counts / sentence count.
pub fn average_sentence_length<S: AsRef<str>>(sentences: &[S], tokenizer: &dyn Tokenizer) -> f64 {
    let total_words: usize = sentences
        .iter()
        .map(|s| tokenizer.words(s.as_ref()).len())
        .sum();
    ratio(total_words, sentences.len())
}

/// Whole-document token count / sentence count.
#[inline]
pub fn average_words_per_sentence(total_tokens: usize, sentence_count: usize) -> f64 {
    ratio(total_tokens, sentence_count)
}

/// `percentage_complex_words` is a fraction (0.25, not 25).
#[inline]
pub fn fog_index(average_sentence_length: f64, percentage_complex_words: f64) -> f64 {
    0.4 * (average_sentence_length + percentage_complex_words)
}

pub fn readability<T, S>(
    tokens: &[T],
    sentences: &[S],
    percentage_complex_words: f64,
    tokenizer: &dyn Tokenizer,
) -> Readability
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let average_sentence_length = average_sentence_length(sentences, tokenizer);
    Readability {
        average_sentence_length,
        fog_index: fog_index(average_sentence_length, percentage_complex_words),
        average_words_per_sentence: average_words_per_sentence(tokens.len(), sentences.len()),
    }
}
