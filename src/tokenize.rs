//! # Tokenization
//! The scorers only ever see token and sentence sequences, so the splitter
//! is pluggable through [`Tokenizer`]. [`TreebankTokenizer`] is the default:
//! a regex approximation of the Penn Treebank conventions for English.
//!
//! - words: alphanumeric runs, glued by internal `-`, `.` or `'`
//!   (`well-known`, `3.2`, `2,000`), contraction suffixes split off (`don't` → `do`, `n't`),
//!   every other non-space character is its own punctuation token
//! - sentences: break after `.`/`!`/`?` followed by whitespace, except after
//!   known abbreviations, single-letter initials, or before a lowercase word

use once_cell::sync::Lazy;
use regex::Regex;

/// Splits raw text into the two sequences the scoring engine consumes.
pub trait Tokenizer: Send + Sync {
    /// Ordered word and punctuation tokens.
    fn words(&self, text: &str) -> Vec<String>;
    /// Ordered, non-empty sentences.
    fn sentences(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    pub fn new() -> Self {
        Self
    }
}

static RE_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?u)\p{N}+(?:,\p{N}{3})+(?:\.\p{N}+)?|[\p{L}\p{N}]+(?:[-.'][\p{L}\p{N}]+)*|\.{2,}|-{2,}|\S",
    )
    .expect("word regex")
});

static RE_SENT_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["')\]]*\s+"#).expect("sentence regex"));

const CONTRACTION_SUFFIXES: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

const ABBREVIATIONS: [&str; 19] = [
    "mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd", "co", "jr",
    "sr", "fig", "approx", "dept", "corp",
];

impl Tokenizer for TreebankTokenizer {
    fn words(&self, text: &str) -> Vec<String> {
        let text = fold_quotes(text);
        let mut out = Vec::new();
        for m in RE_WORD.find_iter(&text) {
            split_contraction(m.as_str(), &mut out);
        }
        out
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut start = 0usize;

        for m in RE_SENT_END.find_iter(text) {
            let terminator = m.as_str().trim_end();
            let cut = m.start() + terminator.len();

            if terminator == "."
                && ends_with_abbreviation(&text[start..m.start()], &text[m.end()..])
            {
                continue;
            }
            if text[m.end()..]
                .chars()
                .next()
                .is_some_and(char::is_lowercase)
            {
                continue;
            }

            push_sentence(&text[start..cut], &mut out);
            start = m.end();
        }
        push_sentence(&text[start..], &mut out);
        out
    }
}

/// Normalize typographic quotes so the apostrophe rules see ASCII.
fn fold_quotes(s: &str) -> String {
    s.replace(['\u{2018}', '\u{2019}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
}

fn split_contraction(tok: &str, out: &mut Vec<String>) {
    let lower = tok.to_ascii_lowercase();

    if lower.len() > 3 && lower.ends_with("n't") {
        let cut = tok.len() - 3;
        out.push(tok[..cut].to_string());
        out.push(tok[cut..].to_string());
        return;
    }

    if let Some(pos) = tok.rfind('\'') {
        let suffix = tok[pos..].to_lowercase();
        if pos > 0 && CONTRACTION_SUFFIXES.contains(&suffix.as_str()) {
            out.push(tok[..pos].to_string());
            out.push(tok[pos..].to_string());
            return;
        }
    }

    out.push(tok.to_string());
}

fn ends_with_abbreviation(before: &str, after: &str) -> bool {
    let Some(last) = before.split_whitespace().last() else {
        return false;
    };
    let word = last.trim_start_matches(|c: char| !c.is_alphanumeric());

    // single initial: "J. Smith", but never the pronoun "I"
    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_uppercase() && c != 'I' {
            return true;
        }
    }

    let lower = word.to_lowercase();
    // "No. 5" only; "was no." ends the sentence
    if lower == "no" {
        return after.chars().next().is_some_and(|c| c.is_ascii_digit());
    }
    ABBREVIATIONS.contains(&lower.as_str())
}

fn push_sentence(raw: &str, out: &mut Vec<String>) {
    let s = raw.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        TreebankTokenizer.words(s)
    }

    fn sentences(s: &str) -> Vec<String> {
        TreebankTokenizer.sentences(s)
    }

    #[test]
    fn punctuation_is_split_off() {
        assert_eq!(
            words("The cat sat, quietly."),
            vec!["The", "cat", "sat", ",", "quietly", "."]
        );
    }

    #[test]
    fn contractions_follow_treebank() {
        assert_eq!(words("Don't stop"), vec!["Do", "n't", "stop"]);
        assert_eq!(words("it’s fine"), vec!["it", "'s", "fine"]);
        assert_eq!(words("they'll go"), vec!["they", "'ll", "go"]);
    }

    #[test]
    fn compounds_and_numbers_stay_whole() {
        assert_eq!(
            words("A well-known 3.2% rise..."),
            vec!["A", "well-known", "3.2", "%", "rise", "..."]
        );
    }

    #[test]
    fn digit_groups_stay_whole() {
        assert_eq!(words("hit 2,000 units"), vec!["hit", "2,000", "units"]);
        assert_eq!(
            words("Sales hit 2,000 units. We stopped."),
            vec!["Sales", "hit", "2,000", "units", ".", "We", "stopped", "."]
        );
        assert_eq!(words("$1,250,000.50 raised"), vec!["$", "1,250,000.50", "raised"]);
        // a comma not followed by a three-digit group still splits
        assert_eq!(words("1,2 and 3, then"), vec!["1", ",", "2", "and", "3", ",", "then"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(words("").is_empty());
        assert!(words("   \n\t").is_empty());
        assert!(sentences("  ").is_empty());
    }

    #[test]
    fn basic_sentence_split() {
        assert_eq!(
            sentences("The cat sat. It ran far fast."),
            vec!["The cat sat.", "It ran far fast."]
        );
        assert_eq!(
            sentences("Really?! Yes. \"Quoted.\" Done"),
            vec!["Really?!", "Yes.", "\"Quoted.\"", "Done"]
        );
    }

    #[test]
    fn abbreviations_and_initials_do_not_split() {
        assert_eq!(
            sentences("Mr. Smith met Dr. Jones. J. Doe left."),
            vec!["Mr. Smith met Dr. Jones.", "J. Doe left."]
        );
        assert_eq!(
            sentences("Prices rose approx. ten percent."),
            vec!["Prices rose approx. ten percent."]
        );
    }

    #[test]
    fn pronoun_i_ends_a_sentence() {
        assert_eq!(
            sentences("Nobody came but I. Then we left."),
            vec!["Nobody came but I.", "Then we left."]
        );
    }

    #[test]
    fn no_is_an_abbreviation_only_before_a_number() {
        assert_eq!(
            sentences("The answer was no. We went home."),
            vec!["The answer was no.", "We went home."]
        );
        assert_eq!(
            sentences("See No. 5 for details. Then stop."),
            vec!["See No. 5 for details.", "Then stop."]
        );
    }
}
