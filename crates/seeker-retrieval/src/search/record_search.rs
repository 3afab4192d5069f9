//! Record search: fuzzy retrieval → optional rerank → reranker-score cut.
//!
//! The lexical threshold bounds which candidates are admitted; the reranker
//! threshold bounds which reranked results are returned.

use std::sync::Arc;

use async_trait::async_trait;
use seeker_core::config::RecordSearchConfig;
use seeker_core::constants::log_query;
use seeker_core::errors::SeekerResult;
use seeker_core::models::scored::filter_by_threshold;
use seeker_core::traits::{IFuzzyRetrieval, ISearchStage};
use seeker_core::{ClientRecord, ScoredItem, SearchRequest};
use tracing::{debug, info};

use crate::ranking::Reranker;

/// Turns a record into reranker input text.
pub type TextExtractor<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

pub struct RecordSearch<R> {
    name: String,
    retrieval: Arc<dyn IFuzzyRetrieval<R>>,
    reranker: Option<Reranker>,
    extract: TextExtractor<R>,
    config: RecordSearchConfig,
}

impl<R> RecordSearch<R>
where
    R: Clone + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        retrieval: Arc<dyn IFuzzyRetrieval<R>>,
        extract: TextExtractor<R>,
        config: RecordSearchConfig,
    ) -> Self {
        Self {
            name: name.into(),
            retrieval,
            reranker: None,
            extract,
            config,
        }
    }

    pub fn with_reranker(mut self, reranker: Reranker) -> Self {
        self.reranker = Some(reranker);
        self
    }

    pub fn has_reranker(&self) -> bool {
        self.reranker.is_some()
    }

    pub fn retrieval_width(&self, top_k: usize) -> usize {
        if self.reranker.is_some() {
            top_k.saturating_mul(self.config.retrieval_multiplier.max(1))
        } else {
            top_k
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<R>>> {
        let top_k = request.top_k();
        let width = self.retrieval_width(top_k);
        let mut candidates = self
            .retrieval
            .search(request.query(), self.config.trigram_threshold, Some(width))
            .await?;

        if candidates.is_empty() {
            debug!(search = %self.name, query = log_query(request.query()), "no record candidates");
            return Ok(Vec::new());
        }
        let candidate_count = candidates.len();

        let results = match &self.reranker {
            Some(reranker) => {
                let reranked = reranker
                    .rerank(request.query(), &candidates, &*self.extract, Some(top_k))
                    .await?;
                filter_by_threshold(reranked, self.config.reranker_score_threshold)
            }
            None => {
                candidates.truncate(top_k);
                candidates
            }
        };

        info!(
            search = %self.name,
            query = log_query(request.query()),
            candidates = candidate_count,
            returned = results.len(),
            top_k,
            "record search complete"
        );
        Ok(results)
    }
}

impl RecordSearch<ClientRecord> {
    /// Client search; reranker text is name, email and description.
    pub fn clients(
        retrieval: Arc<dyn IFuzzyRetrieval<ClientRecord>>,
        config: RecordSearchConfig,
    ) -> Self {
        Self::new("clients", retrieval, Arc::new(ClientRecord::rerank_text), config)
    }
}

#[async_trait]
impl<R> ISearchStage<R> for RecordSearch<R>
where
    R: Clone + Send + Sync + 'static,
{
    async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<R>>> {
        RecordSearch::search(self, request).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
