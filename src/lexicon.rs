//! # Lexicon & stop words
//! Word sets loaded once at startup and shared read-only (`Arc`) by every
//! scoring call afterwards.
//!
//! File format (both lexicon and stop-word lists): one word per line.
//! Lines are trimmed and lower-cased, blank lines and `;` comment lines are
//! skipped. Bytes are decoded lossily because published dictionaries are
//! frequently Latin-1.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Positive / negative sentiment markers.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Build from in-memory word lists (normalized the same way as files).
    pub fn from_words<P, N, S1, S2>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S1>,
        N: IntoIterator<Item = S2>,
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        Self {
            positive: positive
                .into_iter()
                .filter_map(|w| normalize_entry(w.as_ref()))
                .collect(),
            negative: negative
                .into_iter()
                .filter_map(|w| normalize_entry(w.as_ref()))
                .collect(),
        }
    }

    /// Load both lists from disk. A missing file is a hard error.
    pub fn load(positive_path: &Path, negative_path: &Path) -> Result<Self> {
        let positive = read_word_list(positive_path)
            .with_context(|| format!("loading positive words from {}", positive_path.display()))?;
        let negative = read_word_list(negative_path)
            .with_context(|| format!("loading negative words from {}", negative_path.display()))?;

        info!(
            positive = positive.len(),
            negative = negative.len(),
            "lexicon loaded"
        );
        Ok(Self { positive, negative })
    }

    /// Expects an already lower-cased word.
    #[inline]
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Expects an already lower-cased word.
    #[inline]
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

/// Closed vocabulary of function words excluded from complexity counts.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWords {
    /// Built-in English list (NLTK corpus, 179 forms).
    pub fn english() -> Self {
        Self {
            words: ENGLISH_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// No stop words at all: every alphabetic token counts.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .filter_map(|w| normalize_entry(w.as_ref()))
                .collect(),
        }
    }

    /// Replace the built-in list with a custom one.
    pub fn load(path: &Path) -> Result<Self> {
        let words = read_word_list(path)
            .with_context(|| format!("loading stop words from {}", path.display()))?;
        Ok(Self { words })
    }

    /// Add the words of another list on top of the current set.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let extra = read_word_list(path)
            .with_context(|| format!("loading stop words from {}", path.display()))?;
        let before = self.words.len();
        self.words.extend(extra);
        Ok(self.words.len() - before)
    }

    /// Case-insensitive membership check.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize_entry(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() || t.starts_with(';') {
        return None;
    }
    Some(t.to_lowercase())
}

fn read_word_list(path: &Path) -> Result<HashSet<String>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().filter_map(normalize_entry).collect())
}

const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];
