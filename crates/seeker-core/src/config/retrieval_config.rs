use serde::{Deserialize, Serialize};

use super::defaults;

/// Reciprocal Rank Fusion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RrfConfig {
    /// Smoothing constant. 60 is the value from the original RRF paper.
    pub k: u32,
}

impl Default for RrfConfig {
    fn default() -> Self {
        Self {
            k: defaults::DEFAULT_RRF_K,
        }
    }
}

/// Chunk-level vector (and optional keyword) retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkSearchConfig {
    /// Over-fetch factor applied to `top_k` when a reranker is configured.
    pub retrieval_multiplier_with_rerank: usize,
    /// Over-fetch factor applied to `top_k` without a reranker.
    pub retrieval_multiplier_no_rerank: usize,
    /// Cosine threshold used when the request carries none.
    pub default_similarity_threshold: Option<f64>,
    /// Minimum cross-encoder score kept after reranking. Unset keeps everything.
    pub reranker_score_threshold: Option<f64>,
    /// Fuse keyword retrieval with vector retrieval via RRF.
    pub hybrid_keyword: bool,
}

impl Default for ChunkSearchConfig {
    fn default() -> Self {
        Self {
            retrieval_multiplier_with_rerank: defaults::DEFAULT_CHUNK_MULTIPLIER_WITH_RERANK,
            retrieval_multiplier_no_rerank: defaults::DEFAULT_CHUNK_MULTIPLIER_NO_RERANK,
            default_similarity_threshold: None,
            reranker_score_threshold: None,
            hybrid_keyword: defaults::DEFAULT_HYBRID_KEYWORD,
        }
    }
}

/// Document-level aggregation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSearchConfig {
    /// Chunks fetched per requested document.
    pub chunk_retrieval_multiplier: usize,
}

impl Default for DocumentSearchConfig {
    fn default() -> Self {
        Self {
            chunk_retrieval_multiplier: defaults::DEFAULT_CHUNK_RETRIEVAL_MULTIPLIER,
        }
    }
}

/// Record (client) fuzzy search settings.
///
/// Trigram similarity ranges over [0, 1]; cross-encoder scores are logits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSearchConfig {
    /// Lexical admission threshold passed to fuzzy retrieval.
    pub trigram_threshold: f64,
    /// Over-fetch factor applied to `top_k` when reranking.
    pub retrieval_multiplier: usize,
    /// Minimum cross-encoder score kept after reranking.
    pub reranker_score_threshold: f64,
}

impl Default for RecordSearchConfig {
    fn default() -> Self {
        Self {
            trigram_threshold: defaults::DEFAULT_TRIGRAM_THRESHOLD,
            retrieval_multiplier: defaults::DEFAULT_RECORD_RETRIEVAL_MULTIPLIER,
            reranker_score_threshold: defaults::DEFAULT_RECORD_RERANKER_THRESHOLD,
        }
    }
}
