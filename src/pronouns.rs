//! Personal pronoun counter over a fixed closed set. No stemming and no
//! disambiguation: "his" always counts, "US" the country counts as "us".

const PERSONAL_PRONOUNS: [&str; 31] = [
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "myself",
    "ourselves", "yourself", "yourselves", "himself", "herself", "itself", "themselves",
];

#[inline]
pub fn is_personal_pronoun(tok: &str) -> bool {
    PERSONAL_PRONOUNS.contains(&tok.to_lowercase().as_str())
}

pub fn count_personal_pronouns<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens
        .iter()
        .filter(|t| is_personal_pronoun(t.as_ref()))
        .count()
}
