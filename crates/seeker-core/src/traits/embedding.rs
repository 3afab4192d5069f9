use async_trait::async_trait;

use crate::errors::SeekerResult;

/// Synchronous embedding model.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> SeekerResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per input in input order.
    fn embed_batch(&self, texts: &[String]) -> SeekerResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

/// Query/batch embedding as seen by search stages.
#[async_trait]
pub trait IEmbedder: Send + Sync {
    /// Embed a search query. Fails on blank input.
    async fn embed_query(&self, text: &str) -> SeekerResult<Vec<f32>>;

    /// Embed a batch, one vector per input. Fails on an empty batch or any blank text.
    async fn embed_batch(&self, texts: &[String]) -> SeekerResult<Vec<Vec<f32>>>;

    fn dimensions(&self) -> usize;
}
