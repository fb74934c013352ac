use crate::RankedResult;

/// Order by descending score and keep the first `top_k`.
///
/// The sort is stable, so equal scores keep the order they came in
/// (ingestion order when fed from `score_all`). Zero scores are kept; hiding
/// them is a display decision.
pub fn rank(mut results: Vec<RankedResult<'_>>, top_k: usize) -> Vec<RankedResult<'_>> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(top_k);
    results
}
