//! Configuration. Every section deserializes with defaults, so an empty TOML
//! document yields a fully usable [`SeekerConfig`].

pub mod defaults;
mod embedding_config;
mod inference_config;
mod observability_config;
mod reranker_config;
mod retrieval_config;
mod search_config;

pub use embedding_config::EmbeddingConfig;
pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;
pub use reranker_config::RerankerConfig;
pub use retrieval_config::{ChunkSearchConfig, DocumentSearchConfig, RecordSearchConfig, RrfConfig};
pub use search_config::SearchConfig;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SIMILARITY, MAX_TRIGRAM_SIMILARITY, MIN_SIMILARITY};
use crate::errors::{SeekerError, SeekerResult};

/// Root configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekerConfig {
    pub search: SearchConfig,
    pub embedding: EmbeddingConfig,
    pub reranker: RerankerConfig,
    pub rrf: RrfConfig,
    pub chunk_search: ChunkSearchConfig,
    pub document_search: DocumentSearchConfig,
    pub record_search: RecordSearchConfig,
    pub inference: InferenceConfig,
    pub observability: ObservabilityConfig,
}

impl SeekerConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> SeekerResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| SeekerError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no search stage can work with.
    pub fn validate(&self) -> SeekerResult<()> {
        let fail = |msg: String| Err(SeekerError::ConfigError(msg));

        if self.search.default_top_k == 0 || self.search.max_top_k == 0 {
            return fail("search.default_top_k and search.max_top_k must be at least 1".into());
        }
        if self.search.default_top_k > self.search.max_top_k {
            return fail(format!(
                "search.default_top_k ({}) exceeds search.max_top_k ({})",
                self.search.default_top_k, self.search.max_top_k
            ));
        }
        if self.embedding.dimensions == 0 {
            return fail("embedding.dimensions must be at least 1".into());
        }
        if self.embedding.batch_size == 0 {
            return fail("embedding.batch_size must be at least 1".into());
        }
        if self.chunk_search.retrieval_multiplier_with_rerank == 0
            || self.chunk_search.retrieval_multiplier_no_rerank == 0
        {
            return fail("chunk_search retrieval multipliers must be at least 1".into());
        }
        if let Some(t) = self.chunk_search.default_similarity_threshold {
            if !(MIN_SIMILARITY..=MAX_SIMILARITY).contains(&t) {
                return fail(format!(
                    "chunk_search.default_similarity_threshold {t} is outside [-1, 1]"
                ));
            }
        }
        if self.document_search.chunk_retrieval_multiplier == 0 {
            return fail("document_search.chunk_retrieval_multiplier must be at least 1".into());
        }
        if !(0.0..=MAX_TRIGRAM_SIMILARITY).contains(&self.record_search.trigram_threshold) {
            return fail(format!(
                "record_search.trigram_threshold {} is outside [0, 1]",
                self.record_search.trigram_threshold
            ));
        }
        if self.record_search.retrieval_multiplier == 0 {
            return fail("record_search.retrieval_multiplier must be at least 1".into());
        }
        if self.inference.max_concurrency == 0 {
            return fail("inference.max_concurrency must be at least 1".into());
        }
        Ok(())
    }
}
