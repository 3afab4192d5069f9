use serde::{Deserialize, Serialize};

use super::defaults;

/// Cross-encoder reranker configuration.
///
/// Score thresholds are per search type and live in
/// [`ChunkSearchConfig`](super::ChunkSearchConfig) and
/// [`RecordSearchConfig`](super::RecordSearchConfig).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RerankerConfig {
    /// When false, no search stage reranks.
    pub enabled: bool,
    /// Cross-encoder provider: "fastembed", "term-overlap".
    pub provider: String,
    /// Model identifier understood by the provider.
    pub model_name: String,
}

impl Default for RerankerConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_RERANKER_ENABLED,
            provider: defaults::DEFAULT_RERANKER_PROVIDER.to_string(),
            model_name: defaults::DEFAULT_RERANKER_MODEL.to_string(),
        }
    }
}
