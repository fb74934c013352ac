use crate::error::SearchError;
use crate::DocId;
use std::collections::HashMap;

/// Corpus statistics needed by BM25. Built once from the normalized token
/// sequences of every document, in document order, and never modified.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    doc_lengths: Vec<u32>,
    avg_doc_length: f64,
    term_frequency: Vec<HashMap<String, u32>>,
    document_frequency: HashMap<String, u32>,
    idf: HashMap<String, f64>,
}

impl CorpusIndex {
    pub fn build<S: AsRef<[String]>>(token_sequences: &[S]) -> Result<Self, SearchError> {
        if token_sequences.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }
        let n = token_sequences.len();

        let mut doc_lengths = Vec::with_capacity(n);
        let mut term_frequency = Vec::with_capacity(n);
        let mut document_frequency: HashMap<String, u32> = HashMap::new();
        for tokens in token_sequences {
            let tokens = tokens.as_ref();
            doc_lengths.push(tokens.len() as u32);
            let mut tf: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *tf.entry(token.clone()).or_insert(0) += 1;
            }
            for term in tf.keys() {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
            term_frequency.push(tf);
        }

        let total: u64 = doc_lengths.iter().map(|&l| l as u64).sum();
        let avg_doc_length = total as f64 / n as f64;

        let n = n as f64;
        let idf = document_frequency
            .iter()
            .map(|(term, &df)| {
                let df = df as f64;
                // +1 keeps terms present in every document non-negative
                (term.clone(), ((n - df + 0.5) / (df + 0.5) + 1.0).ln())
            })
            .collect::<HashMap<_, _>>();

        tracing::info!(
            num_docs = doc_lengths.len(),
            num_terms = document_frequency.len(),
            avg_doc_length,
            "built corpus index"
        );
        Ok(Self { doc_lengths, avg_doc_length, term_frequency, document_frequency, idf })
    }

    pub fn corpus_size(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn avg_doc_length(&self) -> f64 {
        self.avg_doc_length
    }

    pub fn doc_lengths(&self) -> &[u32] {
        &self.doc_lengths
    }

    /// Token count of a document, `None` for ids outside the corpus.
    pub fn doc_length(&self, doc_id: DocId) -> Option<u32> {
        self.doc_lengths.get(doc_id as usize).copied()
    }

    pub fn term_frequency(&self, doc_id: DocId, term: &str) -> u32 {
        self.term_frequency
            .get(doc_id as usize)
            .and_then(|tf| tf.get(term))
            .copied()
            .unwrap_or(0)
    }

    pub fn document_frequency(&self, term: &str) -> u32 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// IDF of a term; terms outside the vocabulary weigh nothing.
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.document_frequency.contains_key(term)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }
}
