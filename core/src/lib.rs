//! In-memory BM25 retrieval over a fixed collection of short articles.
//!
//! Raw text goes through [`tokenizer::normalize`], the resulting token
//! sequences are turned into an immutable [`CorpusIndex`], and queries are
//! scored with Okapi BM25 and ranked by [`rank::rank`]. [`SearchEngine`]
//! bundles the documents, configuration and index for callers that just want
//! `add_document` / `build` / `search`.

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod rank;
pub mod scorer;
pub mod stemmer;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use config::{Bm25Params, EngineConfig, NormalizerConfig};
pub use engine::{search, SearchEngine};
pub use error::SearchError;
pub use index::CorpusIndex;

pub type DocId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Position in ingestion order, starting at 0.
    pub id: DocId,
    pub title: String,
    pub text: String,
}

/// One entry of a ranked result list. Borrows title and text from the
/// document collection it was produced from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<'a> {
    pub doc_id: DocId,
    pub title: &'a str,
    pub text: &'a str,
    pub score: f64,
}
