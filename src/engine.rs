//! # Metric Aggregator
//! Pure composition of the scorers into one flat [`ResultRecord`] per
//! document. No I/O, suitable for unit tests and parallel batch scoring.
//!
//! Lexicon, stop words and tokenizer are built once and frozen behind `Arc`;
//! a [`Scorer`] is cheap to clone and safe to share across threads.

use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::complexity::complexity_metrics;
use crate::lexicon::{Lexicon, StopWords};
use crate::pronouns::count_personal_pronouns;
use crate::readability::readability;
use crate::sentiment::sentiment_scores;
use crate::tokenize::{Tokenizer, TreebankTokenizer};

/// One document's metrics plus the caller's identifying fields.
///
/// Serialized keys are the column names of the exported table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "URL_ID")]
    pub id: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "Positive_Score")]
    pub positive_score: u64,
    #[serde(rename = "Negative_Score")]
    pub negative_score: u64,
    #[serde(rename = "Polarity_Score")]
    pub polarity_score: f64,
    #[serde(rename = "Subjectivity_Score")]
    pub subjectivity_score: f64,
    #[serde(rename = "Avg_Sentence_Length")]
    pub avg_sentence_length: f64,
    #[serde(rename = "Percentage_Complex_Words")]
    pub percentage_complex_words: f64,
    #[serde(rename = "Fog_Index")]
    pub fog_index: f64,
    #[serde(rename = "Avg_Words_Per_Sentence")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "Complex_Word_Count")]
    pub complex_word_count: u64,
    #[serde(rename = "Word_Count")]
    pub word_count: u64,
    #[serde(rename = "Syllable_Count_Per_Word")]
    pub syllable_count_per_word: f64,
    #[serde(rename = "Personal_Pronoun_Count")]
    pub personal_pronoun_count: u64,
    #[serde(rename = "Avg_Word_Length")]
    pub avg_word_length: f64,
}

impl ResultRecord {
    /// Column order of the exported table.
    pub const COLUMNS: [&'static str; 15] = [
        "URL_ID",
        "URL",
        "Positive_Score",
        "Negative_Score",
        "Polarity_Score",
        "Subjectivity_Score",
        "Avg_Sentence_Length",
        "Percentage_Complex_Words",
        "Fog_Index",
        "Avg_Words_Per_Sentence",
        "Complex_Word_Count",
        "Word_Count",
        "Syllable_Count_Per_Word",
        "Personal_Pronoun_Count",
        "Avg_Word_Length",
    ];

    /// Attach caller identifiers; metric fields are left untouched.
    pub fn with_ids(mut self, id: Option<String>, url: Option<String>) -> Self {
        self.id = id;
        self.url = url;
        self
    }

    /// Cell values in [`Self::COLUMNS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_default(),
            self.url.clone().unwrap_or_default(),
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.percentage_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllable_count_per_word.to_string(),
            self.personal_pronoun_count.to_string(),
            self.avg_word_length.to_string(),
        ]
    }
}

/// Score already-tokenized text. Never fails: empty input yields zeros.
pub fn score_tokens<T, S>(
    tokens: &[T],
    sentences: &[S],
    lexicon: &Lexicon,
    stopwords: &StopWords,
    tokenizer: &dyn Tokenizer,
) -> ResultRecord
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let sentiment = sentiment_scores(tokens, lexicon);
    let complexity = complexity_metrics(tokens, stopwords);
    let read = readability(
        tokens,
        sentences,
        complexity.percentage_complex_words,
        tokenizer,
    );
    let pronouns = count_personal_pronouns(tokens);

    ResultRecord {
        id: None,
        url: None,
        positive_score: sentiment.positive_score as u64,
        negative_score: sentiment.negative_score as u64,
        polarity_score: sentiment.polarity,
        subjectivity_score: sentiment.subjectivity,
        avg_sentence_length: read.average_sentence_length,
        percentage_complex_words: complexity.percentage_complex_words,
        fog_index: read.fog_index,
        avg_words_per_sentence: read.average_words_per_sentence,
        complex_word_count: complexity.complex_word_count as u64,
        word_count: complexity.total_word_count as u64,
        syllable_count_per_word: complexity.average_syllables_per_word,
        personal_pronoun_count: pronouns as u64,
        avg_word_length: complexity.average_word_length,
    }
}

/// Tokenize `raw_text` and score it.
pub fn score_document(
    raw_text: &str,
    lexicon: &Lexicon,
    stopwords: &StopWords,
    tokenizer: &dyn Tokenizer,
) -> ResultRecord {
    let tokens = tokenizer.words(raw_text);
    let sentences = tokenizer.sentences(raw_text);
    score_tokens(&tokens, &sentences, lexicon, stopwords, tokenizer)
}

/// Frozen scoring context shared by the CLI batch and the HTTP handlers.
#[derive(Clone)]
pub struct Scorer {
    lexicon: Arc<Lexicon>,
    stopwords: Arc<StopWords>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for Scorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scorer")
            .field("positive", &self.lexicon.positive_len())
            .field("negative", &self.lexicon.negative_len())
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl Scorer {
    /// Default Treebank tokenizer.
    pub fn new(lexicon: Lexicon, stopwords: StopWords) -> Self {
        Self::with_tokenizer(lexicon, stopwords, Arc::new(TreebankTokenizer))
    }

    pub fn with_tokenizer(
        lexicon: Lexicon,
        stopwords: StopWords,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            stopwords: Arc::new(stopwords),
            tokenizer,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    pub fn score(&self, raw_text: &str) -> ResultRecord {
        let t0 = Instant::now();
        let rec = score_document(
            raw_text,
            &self.lexicon,
            &self.stopwords,
            self.tokenizer.as_ref(),
        );

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("score_duration_ms").record(ms);
        counter!("documents_scored_total").increment(1);
        // counts only, never the text itself
        debug!(
            words = rec.word_count,
            positive = rec.positive_score,
            negative = rec.negative_score,
            elapsed_ms = ms,
            "document scored"
        );
        rec
    }

    /// Score and attach identifiers.
    pub fn score_with_ids(
        &self,
        raw_text: &str,
        id: Option<String>,
        url: Option<String>,
    ) -> ResultRecord {
        self.score(raw_text).with_ids(id, url)
    }
}
