use async_trait::async_trait;

use crate::errors::SeekerResult;
use crate::models::{Chunk, ScoredItem};

/// Vector-similarity retrieval over chunks.
#[async_trait]
pub trait IChunkRetrieval: Send + Sync {
    /// Up to `limit` chunks ordered by cosine similarity, highest first.
    ///
    /// Implementations skip chunks without a vector, never return a chunk
    /// below `threshold`, and fail on a vector of the wrong dimensionality.
    async fn search_by_vector(
        &self,
        vector: &[f32],
        limit: usize,
        threshold: Option<f64>,
    ) -> SeekerResult<Vec<ScoredItem<Chunk>>>;
}

/// Full-text retrieval over chunks, scored as `KeywordRank`.
#[async_trait]
pub trait IKeywordRetrieval: Send + Sync {
    async fn search_by_keyword(
        &self,
        query: &str,
        limit: usize,
    ) -> SeekerResult<Vec<ScoredItem<Chunk>>>;
}

/// Lexical (trigram) retrieval over records of type `R`.
#[async_trait]
pub trait IFuzzyRetrieval<R>: Send + Sync {
    /// Records ordered by similarity in [0, 1], highest first. Implementations
    /// never return a record at or below `threshold`.
    async fn search(
        &self,
        query: &str,
        threshold: f64,
        limit: Option<usize>,
    ) -> SeekerResult<Vec<ScoredItem<R>>>;
}
