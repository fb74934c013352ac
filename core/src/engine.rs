use crate::config::EngineConfig;
use crate::error::SearchError;
use crate::index::CorpusIndex;
use crate::rank::rank;
use crate::scorer::score_all;
use crate::tokenizer::normalize;
use crate::{DocId, Document, RankedResult};

/// Normalize `query_text`, score every document and return the `top_k` best.
///
/// `documents` must be the collection `index` was built from, in the same
/// order; only the length can be checked here.
pub fn search<'a>(
    index: &CorpusIndex,
    documents: &'a [Document],
    query_text: &str,
    config: &EngineConfig,
    top_k: usize,
) -> Result<Vec<RankedResult<'a>>, SearchError> {
    if documents.len() != index.corpus_size() {
        return Err(SearchError::CorpusMismatch { documents: documents.len(), indexed: index.corpus_size() });
    }
    config.bm25.validate()?;
    let query = normalize(query_text, &config.normalizer);
    let scores = score_all(index, &query, &config.bm25)?;
    let results = documents
        .iter()
        .zip(scores)
        .map(|(doc, score)| RankedResult { doc_id: doc.id, title: &doc.title, text: &doc.text, score })
        .collect();
    let ranked = rank(results, top_k);
    tracing::debug!(query_terms = query.len(), top_k, returned = ranked.len(), "search");
    Ok(ranked)
}

/// Documents, their token sequences and the index built over them.
///
/// Lifecycle: `add_document` any number of times, `build` exactly once, then
/// `search` as often as needed. The index is read-only after `build`, so a
/// shared `&SearchEngine` can serve concurrent searches.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    documents: Vec<Document>,
    corpus: Vec<Vec<String>>,
    index: Option<CorpusIndex>,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Store a document and normalize its text. Ids follow insertion order.
    pub fn add_document(&mut self, title: impl Into<String>, text: impl Into<String>) -> Result<DocId, SearchError> {
        if self.index.is_some() {
            tracing::warn!("document rejected: index already built");
            return Err(SearchError::AlreadyBuilt);
        }
        let id = self.documents.len() as DocId;
        let text = text.into();
        self.corpus.push(normalize(&text, &self.config.normalizer));
        self.documents.push(Document { id, title: title.into(), text });
        Ok(id)
    }

    pub fn build(&mut self) -> Result<(), SearchError> {
        if self.index.is_some() {
            return Err(SearchError::AlreadyBuilt);
        }
        self.config.bm25.validate()?;
        self.index = Some(CorpusIndex::build(&self.corpus)?);
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        self.index.is_some()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id as usize)
    }

    pub fn index(&self) -> Option<&CorpusIndex> {
        self.index.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score_all(&self, query_text: &str) -> Result<Vec<f64>, SearchError> {
        let index = self.built_index()?;
        let query = normalize(query_text, &self.config.normalizer);
        score_all(index, &query, &self.config.bm25)
    }

    pub fn search(&self, query_text: &str, top_k: usize) -> Result<Vec<RankedResult<'_>>, SearchError> {
        let index = self.built_index()?;
        search(index, &self.documents, query_text, &self.config, top_k)
    }

    fn built_index(&self) -> Result<&CorpusIndex, SearchError> {
        self.index.as_ref().ok_or_else(|| {
            tracing::debug!("search before build");
            SearchError::UnbuiltIndex
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_order_calls() {
        let mut engine = SearchEngine::default();
        assert_eq!(engine.search("cats", 3).unwrap_err(), SearchError::UnbuiltIndex);
        assert_eq!(engine.score_all("cats").unwrap_err(), SearchError::UnbuiltIndex);
        assert_eq!(engine.build().unwrap_err(), SearchError::EmptyCorpus);
        assert!(!engine.is_built());

        engine.add_document("A", "cats and dogs").unwrap();
        engine.build().unwrap();
        assert_eq!(engine.build().unwrap_err(), SearchError::AlreadyBuilt);
        assert_eq!(engine.add_document("B", "more").unwrap_err(), SearchError::AlreadyBuilt);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn invalid_params_block_build() {
        let mut config = EngineConfig::default();
        config.bm25.b = 2.0;
        let mut engine = SearchEngine::new(config);
        engine.add_document("A", "text").unwrap();
        assert!(matches!(engine.build(), Err(SearchError::InvalidParams(_))));
        assert!(!engine.is_built());
    }

    #[test]
    fn search_checks_collection_size() {
        let mut engine = SearchEngine::default();
        engine.add_document("A", "alpha").unwrap();
        engine.add_document("B", "beta").unwrap();
        engine.build().unwrap();
        let index = engine.index().unwrap();
        let err = search(index, &engine.documents()[..1], "alpha", engine.config(), 3).unwrap_err();
        assert_eq!(err, SearchError::CorpusMismatch { documents: 1, indexed: 2 });
    }

    #[test]
    fn search_rejects_out_of_range_params() {
        let mut engine = SearchEngine::default();
        engine.add_document("Comet", "comet").unwrap();
        let filler = "solar wind carries charged particles across the inner system every single day without pause";
        engine.add_document("Wind", filler).unwrap();
        engine.add_document("Wind again", filler).unwrap();
        engine.build().unwrap();

        let mut config = engine.config().clone();
        config.bm25.b = 2.0;
        let err = search(engine.index().unwrap(), engine.documents(), "comet", &config, 3).unwrap_err();
        assert!(matches!(err, SearchError::InvalidParams(_)));

        let hits = search(engine.index().unwrap(), engine.documents(), "comet", engine.config(), 3).unwrap();
        assert_eq!(hits[0].doc_id, 0);
        assert!(hits.iter().all(|h| h.score >= 0.0));
    }
}
