use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// `build` was called without any documents.
    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,
    /// A search was attempted before the index was built.
    #[error("index has not been built")]
    UnbuiltIndex,
    /// The index is built once; documents cannot be added afterwards.
    #[error("index is already built")]
    AlreadyBuilt,
    #[error("invalid BM25 parameters: {0}")]
    InvalidParams(String),
    #[error("document collection has {documents} entries but the index covers {indexed}")]
    CorpusMismatch { documents: usize, indexed: usize },
}
