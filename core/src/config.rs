use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// English function words dropped before stemming (NLTK's English list).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i","me","my","myself","we","our","ours","ourselves","you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
    "he","him","his","himself","she","she's","her","hers","herself","it","it's","its","itself",
    "they","them","their","theirs","themselves","what","which","who","whom","this","that","that'll","these","those",
    "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
    "a","an","the","and","but","if","or","because","as","until","while","of","at","by","for","with","about","against",
    "between","into","through","during","before","after","above","below","to","from","up","down","in","out","on","off",
    "over","under","again","further","then","once","here","there","when","where","why","how","all","any","both","each",
    "few","more","most","other","some","such","no","nor","not","only","own","same","so","than","too","very",
    "s","t","can","will","just","don","don't","should","should've","now","d","ll","m","o","re","ve","y",
    "ain","aren","aren't","couldn","couldn't","didn","didn't","doesn","doesn't","hadn","hadn't","hasn","hasn't",
    "haven","haven't","isn","isn't","ma","mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't",
    "shouldn","shouldn't","wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't",
];

/// ASCII punctuation replaced by a space before tokenizing.
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Settings for [`crate::tokenizer::normalize`]. Passed explicitly to every
/// call; nothing is cached process-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub stopwords: HashSet<String>,
    pub punctuation: HashSet<char>,
    /// Apply NFKC compatibility normalization before case folding.
    pub unicode_nfkc: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            punctuation: ASCII_PUNCTUATION.chars().collect(),
            unicode_nfkc: false,
        }
    }
}

impl NormalizerConfig {
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

/// Okapi BM25 free parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Document-length normalization strength, in `[0, 1]`.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

impl Bm25Params {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(SearchError::InvalidParams(format!("k1 must be a non-negative number, got {}", self.k1)));
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(SearchError::InvalidParams(format!("b must lie in [0, 1], got {}", self.b)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub normalizer: NormalizerConfig,
    pub bm25: Bm25Params,
}
