//! Okapi BM25 scoring against a built [`CorpusIndex`].
//!
//! ```text
//! score(d, q) = Σ_t idf(t) * tf(d,t) * (k1 + 1) / (tf(d,t) + k1 * (1 - b + b * |d| / avgdl))
//! ```
//!
//! summed once per distinct query term.

use crate::config::Bm25Params;
use crate::error::SearchError;
use crate::index::CorpusIndex;
use crate::DocId;
use std::collections::HashSet;

/// Contribution of one term to one document's score.
pub fn term_weight(idf: f64, tf: u32, doc_len: u32, avg_doc_length: f64, params: &Bm25Params) -> f64 {
    if tf == 0 {
        return 0.0;
    }
    let tf = tf as f64;
    let norm = 1.0 - params.b + params.b * doc_len as f64 / avg_doc_length;
    idf * (tf * (params.k1 + 1.0)) / (tf + params.k1 * norm)
}

/// BM25 score of one document. Ids outside the corpus score `0.0`.
///
/// Parameters are checked first: `b` outside `[0, 1]` or a negative `k1`
/// would make scores negative.
pub fn score(index: &CorpusIndex, doc_id: DocId, query: &[String], params: &Bm25Params) -> Result<f64, SearchError> {
    params.validate()?;
    let Some(doc_len) = index.doc_length(doc_id) else {
        return Ok(0.0);
    };
    let avgdl = index.avg_doc_length();
    Ok(distinct_terms(index, query)
        .map(|term| term_weight(index.idf(term), index.term_frequency(doc_id, term), doc_len, avgdl, params))
        .fold(0.0, |acc, w| acc + w))
}

/// Scores for every document, indexed by doc id.
pub fn score_all(index: &CorpusIndex, query: &[String], params: &Bm25Params) -> Result<Vec<f64>, SearchError> {
    params.validate()?;
    let terms: Vec<&str> = distinct_terms(index, query).collect();
    let avgdl = index.avg_doc_length();
    Ok(index
        .doc_lengths()
        .iter()
        .enumerate()
        .map(|(doc, &doc_len)| {
            terms
                .iter()
                .map(|term| {
                    let tf = index.term_frequency(doc as DocId, term);
                    term_weight(index.idf(term), tf, doc_len, avgdl, params)
                })
                .fold(0.0, |acc, w| acc + w)
        })
        .collect())
}

/// Query terms known to the index, first occurrence order. A fixed order
/// keeps float sums identical across calls.
fn distinct_terms<'q>(index: &'q CorpusIndex, query: &'q [String]) -> impl Iterator<Item = &'q str> + 'q {
    let mut seen = HashSet::new();
    query
        .iter()
        .map(String::as_str)
        .filter(move |term| index.contains_term(term) && seen.insert(*term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(docs: &[&[&str]]) -> CorpusIndex {
        let seqs: Vec<Vec<String>> = docs.iter().map(|d| d.iter().map(|t| t.to_string()).collect()).collect();
        CorpusIndex::build(&seqs).unwrap()
    }

    fn q(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn matches_formula() {
        let idx = index(&[&["cat", "sat", "mat"], &["dog", "cat", "pet"], &["weather"]]);
        let p = Bm25Params::default();
        let idf = ((3.0 - 2.0 + 0.5) / (2.0 + 0.5) + 1.0_f64).ln();
        let avgdl = 7.0 / 3.0;
        let expected = idf * (1.0 * 2.5) / (1.0 + 1.5 * (1.0 - 0.75 + 0.75 * 3.0 / avgdl));
        assert!((score(&idx, 0, &q(&["cat"]), &p).unwrap() - expected).abs() < 1e-12);
        assert_eq!(score(&idx, 2, &q(&["cat"]), &p).unwrap(), 0.0);
    }

    #[test]
    fn repeated_query_terms_count_once() {
        let idx = index(&[&["cat", "cat"], &["dog"]]);
        let p = Bm25Params::default();
        assert_eq!(score(&idx, 0, &q(&["cat"]), &p).unwrap(), score(&idx, 0, &q(&["cat", "cat", "cat"]), &p).unwrap());
    }

    #[test]
    fn unknown_terms_do_nothing() {
        let idx = index(&[&["cat"], &["dog"]]);
        let p = Bm25Params::default();
        assert_eq!(score(&idx, 0, &q(&["cat", "zebra"]), &p).unwrap(), score(&idx, 0, &q(&["cat"]), &p).unwrap());
        assert_eq!(score_all(&idx, &q(&["zebra"]), &p).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn score_all_agrees_with_score() {
        let idx = index(&[&["a1", "b1"], &["b1", "b1", "c1"], &["c1"]]);
        let p = Bm25Params { k1: 1.2, b: 0.5 };
        let query = q(&["b1", "c1"]);
        let all = score_all(&idx, &query, &p).unwrap();
        for (doc, s) in all.iter().enumerate() {
            assert_eq!(*s, score(&idx, doc as DocId, &query, &p).unwrap());
        }
    }

    #[test]
    fn empty_documents_do_not_produce_nan() {
        let idx = index(&[&[], &[]]);
        let all = score_all(&idx, &q(&["cat"]), &Bm25Params::default()).unwrap();
        assert_eq!(all, vec![0.0, 0.0]);
    }

    #[test]
    fn out_of_range_params_are_rejected() {
        let idx = index(&[&["comet"], &["dust", "ice", "rock"]]);
        let p = Bm25Params { k1: 1.5, b: 2.0 };
        assert!(matches!(score(&idx, 0, &q(&["comet"]), &p), Err(SearchError::InvalidParams(_))));
        assert!(matches!(score_all(&idx, &q(&["comet"]), &p), Err(SearchError::InvalidParams(_))));
    }

    #[test]
    fn term_weight_saturates() {
        let p = Bm25Params::default();
        let mut last = 0.0;
        for tf in 1..20 {
            let w = term_weight(1.0, tf, 10, 10.0, &p);
            assert!(w > last);
            assert!(w < p.k1 + 1.0);
            last = w;
        }
    }
}
