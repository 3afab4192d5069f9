use async_trait::async_trait;

use crate::errors::SeekerResult;

/// Synchronous pairwise relevance model (cross-encoder).
///
/// Returns one unbounded logit per text, in input order. Higher is more relevant.
pub trait ICrossEncoder: Send + Sync {
    fn score_pairs(&self, query: &str, texts: &[String]) -> SeekerResult<Vec<f64>>;

    fn name(&self) -> &str;
}

/// Pairwise relevance scoring as seen by the reranker.
#[async_trait]
pub trait IRelevanceModel: Send + Sync {
    /// Score every `(query, text)` pair; one score per text, in input order.
    async fn score(&self, query: &str, texts: &[String]) -> SeekerResult<Vec<f64>>;
}
