use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "fastembed", "hash".
    pub provider: String,
    /// Model identifier understood by the provider.
    pub model_name: String,
    /// Embedding dimensions produced by the model.
    pub dimensions: usize,
    /// Batch size for `embed_batch`.
    pub batch_size: usize,
    /// Max entries in the query-embedding cache. 0 disables caching.
    pub cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model_name: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
