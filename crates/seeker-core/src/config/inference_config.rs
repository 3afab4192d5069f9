use serde::{Deserialize, Serialize};

use super::defaults;

/// Worker pool bounds for blocking model inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Inference calls allowed to run in parallel. Excess calls queue.
    pub max_concurrency: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_concurrency: defaults::DEFAULT_INFERENCE_CONCURRENCY,
        }
    }
}
