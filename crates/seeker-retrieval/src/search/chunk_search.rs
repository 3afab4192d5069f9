//! Chunk search: embed → vector retrieval (optionally fused with keyword
//! retrieval) → optional rerank.

use std::sync::Arc;

use async_trait::async_trait;
use seeker_core::config::ChunkSearchConfig;
use seeker_core::constants::log_query;
use seeker_core::errors::SeekerResult;
use seeker_core::models::scored::filter_by_threshold;
use seeker_core::traits::{IChunkRetrieval, IEmbedder, IKeywordRetrieval, ISearchStage};
use seeker_core::{Chunk, ScoredItem, SearchRequest};
use tracing::{debug, info};

use crate::ranking::Reranker;
use crate::search::rrf_fusion::ReciprocalRankFusion;

struct KeywordLeg {
    retrieval: Arc<dyn IKeywordRetrieval>,
    fusion: ReciprocalRankFusion,
}

pub struct ChunkSearch {
    embedder: Arc<dyn IEmbedder>,
    retrieval: Arc<dyn IChunkRetrieval>,
    keyword: Option<KeywordLeg>,
    reranker: Option<Reranker>,
    config: ChunkSearchConfig,
}

impl ChunkSearch {
    pub fn new(
        embedder: Arc<dyn IEmbedder>,
        retrieval: Arc<dyn IChunkRetrieval>,
        config: ChunkSearchConfig,
    ) -> Self {
        Self {
            embedder,
            retrieval,
            keyword: None,
            reranker: None,
            config,
        }
    }

    pub fn with_reranker(mut self, reranker: Reranker) -> Self {
        self.reranker = Some(reranker);
        self
    }

    /// Also retrieve by keyword and fuse both candidate lists with RRF.
    pub fn with_keyword_retrieval(
        mut self,
        retrieval: Arc<dyn IKeywordRetrieval>,
        fusion: ReciprocalRankFusion,
    ) -> Self {
        self.keyword = Some(KeywordLeg { retrieval, fusion });
        self
    }

    pub fn has_reranker(&self) -> bool {
        self.reranker.is_some()
    }

    pub fn is_hybrid(&self) -> bool {
        self.keyword.is_some()
    }

    /// Candidates requested from retrieval for a given `top_k`.
    pub fn retrieval_width(&self, top_k: usize) -> usize {
        let multiplier = if self.reranker.is_some() {
            self.config.retrieval_multiplier_with_rerank
        } else {
            self.config.retrieval_multiplier_no_rerank
        };
        top_k.saturating_mul(multiplier.max(1))
    }

    async fn vector_candidates(
        &self,
        query: &str,
        width: usize,
        threshold: Option<f64>,
    ) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        let vector = self.embedder.embed_query(query).await?;
        self.retrieval.search_by_vector(&vector, width, threshold).await
    }

    async fn candidates(&self, request: &SearchRequest, width: usize) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        let query = request.query();
        let threshold = request
            .threshold()
            .or(self.config.default_similarity_threshold);

        let Some(keyword) = &self.keyword else {
            return self.vector_candidates(query, width, threshold).await;
        };

        let (vector_hits, keyword_hits) = tokio::join!(
            self.vector_candidates(query, width, threshold),
            keyword.retrieval.search_by_keyword(query, width),
        );
        let lists = [vector_hits?, keyword_hits?];
        debug!(
            vector = lists[0].len(),
            keyword = lists[1].len(),
            "fusing chunk candidates"
        );
        Ok(keyword.fusion.fuse_with_limit(&lists, |c: &Chunk| c.id, width))
    }

    /// Ranked chunks for `request`, at most `request.top_k()` of them.
    pub async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        let top_k = request.top_k();
        let width = self.retrieval_width(top_k);
        let mut candidates = self.candidates(request, width).await?;

        if candidates.is_empty() {
            debug!(query = log_query(request.query()), "no chunk candidates");
            return Ok(Vec::new());
        }

        let results = match &self.reranker {
            Some(reranker) => {
                let reranked = reranker
                    .rerank(
                        request.query(),
                        &candidates,
                        &|c: &Chunk| c.content.clone(),
                        Some(top_k),
                    )
                    .await?;
                match self.config.reranker_score_threshold {
                    Some(threshold) => filter_by_threshold(reranked, threshold),
                    None => reranked,
                }
            }
            None => {
                candidates.truncate(top_k);
                candidates
            }
        };

        info!(
            query = log_query(request.query()),
            width,
            returned = results.len(),
            top_k,
            reranked = self.reranker.is_some(),
            "chunk search complete"
        );
        Ok(results)
    }
}

#[async_trait]
impl ISearchStage<Chunk> for ChunkSearch {
    async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        ChunkSearch::search(self, request).await
    }

    fn name(&self) -> &str {
        "chunks"
    }
}
