//! Async model engines consumed by the search stages.
//!
//! `EmbeddingEngine` implements [`IEmbedder`]: input validation, the query
//! cache, pool offload and a dimensionality check around an embedding
//! provider. `CrossEncoderEngine` implements [`IRelevanceModel`] the same way
//! around a cross-encoder.

use std::sync::Arc;

use async_trait::async_trait;
use seeker_core::config::{EmbeddingConfig, RerankerConfig};
use seeker_core::constants::log_query;
use seeker_core::errors::{EmbeddingError, RetrievalError, SeekerResult};
use seeker_core::traits::{ICrossEncoder, IEmbedder, IEmbeddingProvider, IRelevanceModel};
use tracing::{debug, info};

use crate::cache::QueryCache;
use crate::lazy::LazyModel;
use crate::pool::InferencePool;
use crate::providers;

pub struct EmbeddingEngine {
    model: LazyModel<dyn IEmbeddingProvider>,
    pool: InferencePool,
    cache: QueryCache,
    dimensions: usize,
    batch_size: usize,
}

impl EmbeddingEngine {
    pub fn new(
        model: LazyModel<dyn IEmbeddingProvider>,
        pool: InferencePool,
        config: &EmbeddingConfig,
    ) -> Self {
        info!(
            model = model.name(),
            dims = config.dimensions,
            cache_size = config.cache_size,
            "EmbeddingEngine initialized"
        );
        Self {
            model,
            pool,
            cache: QueryCache::new(config.cache_size),
            dimensions: config.dimensions,
            batch_size: config.batch_size.max(1),
        }
    }

    /// Engine over the configured provider, loaded on first use.
    pub fn from_config(config: &EmbeddingConfig, pool: InferencePool) -> Self {
        let loader = providers::create_embedding_loader(config);
        let model = LazyModel::new("embedding", config.model_name.clone(), pool.clone(), loader);
        Self::new(model, pool, config)
    }

    /// Engine around an already constructed provider.
    pub fn with_provider(
        provider: Arc<dyn IEmbeddingProvider>,
        pool: InferencePool,
        config: &EmbeddingConfig,
    ) -> Self {
        let name = provider.name().to_string();
        Self::new(LazyModel::preloaded("embedding", name, pool.clone(), provider), pool, config)
    }

    pub fn model(&self) -> &LazyModel<dyn IEmbeddingProvider> {
        &self.model
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    fn check_dimensions(&self, vector: &[f32]) -> SeekerResult<()> {
        if vector.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl IEmbedder for EmbeddingEngine {
    async fn embed_query(&self, text: &str) -> SeekerResult<Vec<f32>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EmbeddingError::EmptyInput.into());
        }

        let key = QueryCache::key(self.model.name(), text);
        if let Some(vector) = self.cache.get(&key) {
            debug!(query = log_query(text), "query embedding cache hit");
            return Ok(vector);
        }

        let model = self.model.get().await?;
        let owned = text.to_string();
        let vector = self
            .pool
            .run("embed_query", move || model.embed(&owned))
            .await?;
        self.check_dimensions(&vector)?;

        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    async fn embed_batch(&self, texts: &[String]) -> SeekerResult<Vec<Vec<f32>>> {
        if texts.is_empty() || texts.iter().any(|t| t.trim().is_empty()) {
            return Err(EmbeddingError::EmptyInput.into());
        }

        let model = self.model.get().await?;
        let mut vectors = Vec::with_capacity(texts.len());
        for batch in texts.chunks(self.batch_size) {
            let model = Arc::clone(&model);
            let owned = batch.to_vec();
            let out = self
                .pool
                .run("embed_batch", move || model.embed_batch(&owned))
                .await?;
            if out.len() != batch.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("expected {} embeddings, got {}", batch.len(), out.len()),
                }
                .into());
            }
            for vector in &out {
                self.check_dimensions(vector)?;
            }
            vectors.extend(out);
        }
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

pub struct CrossEncoderEngine {
    model: LazyModel<dyn ICrossEncoder>,
    pool: InferencePool,
}

impl CrossEncoderEngine {
    pub fn new(model: LazyModel<dyn ICrossEncoder>, pool: InferencePool) -> Self {
        Self { model, pool }
    }

    pub fn from_config(config: &RerankerConfig, pool: InferencePool) -> Self {
        let loader = providers::create_cross_encoder_loader(config);
        let model = LazyModel::new("cross_encoder", config.model_name.clone(), pool.clone(), loader);
        Self::new(model, pool)
    }

    pub fn with_model(model: Arc<dyn ICrossEncoder>, pool: InferencePool) -> Self {
        let name = model.name().to_string();
        Self::new(LazyModel::preloaded("cross_encoder", name, pool.clone(), model), pool)
    }

    pub fn model(&self) -> &LazyModel<dyn ICrossEncoder> {
        &self.model
    }
}

#[async_trait]
impl IRelevanceModel for CrossEncoderEngine {
    async fn score(&self, query: &str, texts: &[String]) -> SeekerResult<Vec<f64>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let model = self.model.get().await?;
        let query = query.to_string();
        let owned = texts.to_vec();
        let scores = self
            .pool
            .run("cross_encode", move || model.score_pairs(&query, &owned))
            .await?;
        if scores.len() != texts.len() {
            return Err(RetrievalError::RankingFailed {
                reason: format!("expected {} scores, got {}", texts.len(), scores.len()),
            }
            .into());
        }
        Ok(scores)
    }
}
