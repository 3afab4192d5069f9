use serde::{Deserialize, Serialize};

use super::defaults;

/// Request-level limits for the unified search surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// `top_k` used when the caller does not supply one.
    pub default_top_k: usize,
    /// Largest `top_k` a caller may ask for.
    pub max_top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_k: defaults::DEFAULT_TOP_K,
            max_top_k: defaults::DEFAULT_MAX_TOP_K,
        }
    }
}
