//! Model providers and loader selection.
//!
//! Embedding:
//! 1. fastembed (local ONNX models, feature `fastembed`)
//! 2. hash (always available, lexical only)
//!
//! Cross-encoder:
//! 1. fastembed `TextRerank` (feature `fastembed`)
//! 2. term-overlap (always available)

pub mod hash_embedder;
pub mod term_overlap;

#[cfg(feature = "fastembed")]
pub mod fastembed_cross_encoder;
#[cfg(feature = "fastembed")]
pub mod fastembed_provider;

pub use hash_embedder::HashEmbedder;
pub use term_overlap::TermOverlapScorer;

#[cfg(feature = "fastembed")]
pub use fastembed_cross_encoder::FastEmbedCrossEncoder;
#[cfg(feature = "fastembed")]
pub use fastembed_provider::FastEmbedProvider;

use std::sync::Arc;

use seeker_core::config::{EmbeddingConfig, RerankerConfig};
use seeker_core::traits::{ICrossEncoder, IEmbeddingProvider};
use tracing::{info, warn};

use crate::lazy::ModelLoader;

/// Lowercase alphanumeric terms in order of appearance.
pub(crate) fn terms(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Loader for the configured embedding provider.
///
/// Unknown providers, a `fastembed` request in a build without the feature,
/// and a fastembed model that fails to load all fall back to [`HashEmbedder`].
pub fn create_embedding_loader(config: &EmbeddingConfig) -> ModelLoader<dyn IEmbeddingProvider> {
    let dimensions = config.dimensions;
    match config.provider.as_str() {
        "fastembed" => fastembed_embedding_loader(config),
        "hash" => {
            info!(provider = "hash", dims = dimensions, "using hash embedding provider");
            hash_loader(dimensions)
        }
        other => {
            warn!(provider = %other, "unknown embedding provider, using hash fallback");
            hash_loader(dimensions)
        }
    }
}

/// Loader for the configured cross-encoder, with the same fallback rule.
pub fn create_cross_encoder_loader(config: &RerankerConfig) -> ModelLoader<dyn ICrossEncoder> {
    match config.provider.as_str() {
        "fastembed" => fastembed_rerank_loader(config),
        "term-overlap" => {
            info!(provider = "term-overlap", "using term-overlap cross-encoder");
            term_overlap_loader()
        }
        other => {
            warn!(provider = %other, "unknown cross-encoder provider, using term-overlap fallback");
            term_overlap_loader()
        }
    }
}

fn hash_loader(dimensions: usize) -> ModelLoader<dyn IEmbeddingProvider> {
    Arc::new(move || Ok(Arc::new(HashEmbedder::new(dimensions)) as Arc<dyn IEmbeddingProvider>))
}

fn term_overlap_loader() -> ModelLoader<dyn ICrossEncoder> {
    Arc::new(|| Ok(Arc::new(TermOverlapScorer::new()) as Arc<dyn ICrossEncoder>))
}

#[cfg(feature = "fastembed")]
fn fastembed_embedding_loader(config: &EmbeddingConfig) -> ModelLoader<dyn IEmbeddingProvider> {
    let model_name = config.model_name.clone();
    let dimensions = config.dimensions;
    let batch_size = config.batch_size;
    Arc::new(move || {
        match FastEmbedProvider::load(&model_name, dimensions, batch_size) {
            Ok(provider) => Ok(Arc::new(provider) as Arc<dyn IEmbeddingProvider>),
            Err(e) => {
                warn!(model = %model_name, error = %e, "fastembed failed to load, falling back to hash");
                Ok(Arc::new(HashEmbedder::new(dimensions)) as Arc<dyn IEmbeddingProvider>)
            }
        }
    })
}

#[cfg(not(feature = "fastembed"))]
fn fastembed_embedding_loader(config: &EmbeddingConfig) -> ModelLoader<dyn IEmbeddingProvider> {
    warn!(
        model = %config.model_name,
        "fastembed provider requested but the `fastembed` feature is disabled; using hash fallback"
    );
    hash_loader(config.dimensions)
}

#[cfg(feature = "fastembed")]
fn fastembed_rerank_loader(config: &RerankerConfig) -> ModelLoader<dyn ICrossEncoder> {
    let model_name = config.model_name.clone();
    Arc::new(move || match FastEmbedCrossEncoder::load(&model_name) {
        Ok(model) => Ok(Arc::new(model) as Arc<dyn ICrossEncoder>),
        Err(e) => {
            warn!(model = %model_name, error = %e, "fastembed reranker failed to load, falling back to term-overlap");
            Ok(Arc::new(TermOverlapScorer::new()) as Arc<dyn ICrossEncoder>)
        }
    })
}

#[cfg(not(feature = "fastembed"))]
fn fastembed_rerank_loader(config: &RerankerConfig) -> ModelLoader<dyn ICrossEncoder> {
    warn!(
        model = %config.model_name,
        "fastembed reranker requested but the `fastembed` feature is disabled; using term-overlap fallback"
    );
    term_overlap_loader()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            terms("Roth-IRA, 401(k) rollover!"),
            vec!["roth", "ira", "401", "k", "rollover"]
        );
        assert!(terms("  ... ").is_empty());
    }

    #[test]
    fn hash_provider_selected_by_name() {
        let config = EmbeddingConfig {
            provider: "hash".into(),
            dimensions: 64,
            ..Default::default()
        };
        let provider = create_embedding_loader(&config)().unwrap();
        assert_eq!(provider.name(), "hash");
        assert_eq!(provider.dimensions(), 64);
    }

    #[test]
    fn unknown_embedding_provider_falls_back_to_hash() {
        let config = EmbeddingConfig {
            provider: "nonexistent".into(),
            dimensions: 32,
            ..Default::default()
        };
        let provider = create_embedding_loader(&config)().unwrap();
        assert_eq!(provider.name(), "hash");
    }

    #[test]
    fn unknown_cross_encoder_falls_back_to_term_overlap() {
        let config = RerankerConfig {
            provider: "nonexistent".into(),
            ..Default::default()
        };
        let model = create_cross_encoder_loader(&config)().unwrap();
        assert_eq!(model.name(), "term-overlap");
    }

    #[cfg(not(feature = "fastembed"))]
    #[test]
    fn fastembed_without_feature_falls_back() {
        let provider = create_embedding_loader(&EmbeddingConfig::default())().unwrap();
        assert_eq!(provider.name(), "hash");
        assert_eq!(provider.dimensions(), 384);
        let model = create_cross_encoder_loader(&RerankerConfig::default())().unwrap();
        assert_eq!(model.name(), "term-overlap");
    }
}
