//! # Syllable Estimator
//! Vowel-cluster heuristic: every run of vowels counts as one syllable
//! nucleus, a trailing silent "e" is ignored, and every word has at least
//! one syllable.
//!
//! Kept behind a single function so a dictionary-backed lookup can replace it
//! without touching the downstream metrics.

/// Only plain ASCII vowels count; "y" is deliberately not a vowel here.
#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Estimate the number of syllables in `word` (always `>= 1`).
pub fn estimate_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    // silent "e" is dropped before the scan, not after
    let stem = lower.strip_suffix('e').unwrap_or(&lower);

    let mut count = 0usize;
    let mut prev_vowel = false;
    for c in stem.chars() {
        let v = is_vowel(c);
        if v && !prev_vowel {
            count += 1;
        }
        prev_vowel = v;
    }

    count.max(1)
}

/// Complex word = more than two estimated syllables.
#[inline]
pub fn is_complex(word: &str) -> bool {
    estimate_syllables(word) > 2
}
