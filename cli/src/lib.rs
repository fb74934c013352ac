pub mod config;
pub mod display;
pub mod ingest;
pub mod repl;

use anyhow::Result;
use ingest::RawDocument;
use newsrank_core::{EngineConfig, SearchEngine};

/// Add every document in order and build the index.
pub fn build_engine(config: EngineConfig, docs: Vec<RawDocument>) -> Result<SearchEngine> {
    let mut engine = SearchEngine::new(config);
    for doc in docs {
        engine.add_document(doc.title, doc.body)?;
    }
    engine.build()?;
    Ok(engine)
}
