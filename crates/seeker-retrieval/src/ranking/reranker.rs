//! Cross-encoder reranking.
//!
//! Every candidate is scored against the query by the relevance model; the
//! previous score moves into the item's history and the new score carries
//! `ScoreSource::CrossEncoder`.

use std::sync::Arc;

use seeker_core::errors::{RetrievalError, SeekerError, SeekerResult};
use seeker_core::models::scored::sort_descending;
use seeker_core::traits::IRelevanceModel;
use seeker_core::{ScoreSource, ScoredItem};
use tracing::debug;

#[derive(Clone)]
pub struct Reranker {
    model: Arc<dyn IRelevanceModel>,
}

impl Reranker {
    pub fn new(model: Arc<dyn IRelevanceModel>) -> Self {
        Self { model }
    }

    /// Rescore and reorder `items`, truncating to `top_k` when given.
    ///
    /// `items` is left untouched; the result holds re-scored clones. Fails
    /// with `InvalidInput` on a blank query or no items, and with
    /// `RankingFailed` if the model returns the wrong number of scores or NaN.
    pub async fn rerank<T>(
        &self,
        query: &str,
        items: &[ScoredItem<T>],
        extract: &(dyn Fn(&T) -> String + Sync),
        top_k: Option<usize>,
    ) -> SeekerResult<Vec<ScoredItem<T>>>
    where
        T: Clone + Send + Sync,
    {
        if query.trim().is_empty() {
            return Err(SeekerError::invalid_input("rerank query cannot be empty"));
        }
        if items.is_empty() {
            return Err(SeekerError::invalid_input("rerank needs at least one candidate"));
        }

        let texts: Vec<String> = items.iter().map(|i| extract(&i.item)).collect();
        let scores = self.model.score(query, &texts).await?;

        if scores.len() != items.len() {
            return Err(RetrievalError::RankingFailed {
                reason: format!(
                    "relevance model returned {} scores for {} candidates",
                    scores.len(),
                    items.len()
                ),
            }
            .into());
        }
        if let Some(position) = scores.iter().position(|s| s.is_nan()) {
            return Err(RetrievalError::RankingFailed {
                reason: format!("relevance model returned NaN for candidate {position}"),
            }
            .into());
        }

        let mut reranked: Vec<ScoredItem<T>> = items
            .iter()
            .cloned()
            .zip(scores)
            .map(|(item, score)| item.assign_score(ScoreSource::CrossEncoder.of(score)))
            .collect();
        sort_descending(&mut reranked);
        if let Some(k) = top_k {
            reranked.truncate(k);
        }

        debug!(
            candidates = items.len(),
            returned = reranked.len(),
            top = reranked.first().map(|i| i.value()),
            "rerank complete"
        );
        Ok(reranked)
    }
}

impl std::fmt::Debug for Reranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reranker").finish_non_exhaustive()
    }
}
