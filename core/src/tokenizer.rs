use crate::config::NormalizerConfig;
use crate::stemmer;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{M}\p{N}]+").expect("valid regex");
}

/// Turn raw text into the token sequence used for indexing and querying.
///
/// Steps run in a fixed order: (optional NFKC), lowercase, punctuation to
/// spaces, word split, stopword removal, drop single characters, Porter stem.
/// Stopwords are matched before stemming.
pub fn normalize(text: &str, config: &NormalizerConfig) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let folded = if config.unicode_nfkc {
        text.nfkc().collect::<String>().to_lowercase()
    } else {
        text.to_lowercase()
    };
    // replace, don't delete: "state-of-the-art" must not become one token
    let spaced: String = folded
        .chars()
        .map(|c| if config.punctuation.contains(&c) { ' ' } else { c })
        .collect();

    WORD.find_iter(&spaced)
        .map(|m| m.as_str())
        .filter(|token| !config.is_stopword(token))
        .filter(|token| token.chars().count() > 1)
        .map(stemmer::stem)
        .collect()
}
