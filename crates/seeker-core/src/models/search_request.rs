use std::num::NonZeroUsize;

use serde::Serialize;

use crate::constants::{MAX_SIMILARITY, MIN_SIMILARITY};
use crate::errors::{SeekerError, SeekerResult};

/// A validated search request.
///
/// Only [`SearchRequest::new`] builds one, so every request reaching a search
/// stage has a non-blank trimmed query, `top_k >= 1`, and a threshold inside
/// [-1, 1] when one is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    query: String,
    top_k: NonZeroUsize,
    threshold: Option<f64>,
}

impl SearchRequest {
    pub fn new(query: &str, top_k: usize, threshold: Option<f64>) -> SeekerResult<Self> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SeekerError::invalid_input(
                "search query cannot be empty or whitespace only",
            ));
        }
        let Some(top_k) = NonZeroUsize::new(top_k) else {
            return Err(SeekerError::invalid_input("top_k must be at least 1"));
        };
        if let Some(t) = threshold {
            if !(MIN_SIMILARITY..=MAX_SIMILARITY).contains(&t) {
                return Err(SeekerError::invalid_input(format!(
                    "threshold {t} must be between -1.0 and 1.0"
                )));
            }
        }
        Ok(Self {
            query: query.to_string(),
            top_k,
            threshold,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn top_k(&self) -> usize {
        self.top_k.get()
    }

    pub fn non_zero_top_k(&self) -> NonZeroUsize {
        self.top_k
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Same query and threshold with a different `top_k`.
    pub fn with_top_k(&self, top_k: NonZeroUsize) -> Self {
        Self {
            query: self.query.clone(),
            top_k,
            threshold: self.threshold,
        }
    }
}
