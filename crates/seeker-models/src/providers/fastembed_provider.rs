//! Local ONNX embedding models via fastembed.

use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use seeker_core::errors::{EmbeddingError, SeekerResult};
use seeker_core::traits::IEmbeddingProvider;
use tracing::debug;

/// Embedding provider backed by `fastembed::TextEmbedding`.
///
/// Inference needs exclusive access to the session, so the model sits behind
/// a `Mutex`; the inference pool decides how many callers queue on it.
pub struct FastEmbedProvider {
    model: Mutex<TextEmbedding>,
    model_name: String,
    dimensions: usize,
    batch_size: usize,
}

impl FastEmbedProvider {
    /// Load (downloading on first use) the named model.
    pub fn load(model_name: &str, dimensions: usize, batch_size: usize) -> SeekerResult<Self> {
        let model = TextEmbedding::try_new(
            InitOptions::new(embedding_model(model_name)?).with_show_download_progress(false),
        )
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            model: model_name.to_string(),
            reason: e.to_string(),
        })?;

        debug!(model = %model_name, dims = dimensions, "fastembed model loaded");

        Ok(Self {
            model: Mutex::new(model),
            model_name: model_name.to_string(),
            dimensions,
            batch_size: batch_size.max(1),
        })
    }

    fn infer(&self, texts: Vec<&str>) -> SeekerResult<Vec<Vec<f32>>> {
        let mut model = self.model.lock().map_err(|_| EmbeddingError::InferenceFailed {
            reason: format!("{} session lock poisoned", self.model_name),
        })?;
        let vectors = model
            .embed(texts, Some(self.batch_size))
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;
        for v in &vectors {
            if v.len() != self.dimensions {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.dimensions,
                    actual: v.len(),
                }
                .into());
            }
        }
        Ok(vectors)
    }
}

fn embedding_model(name: &str) -> SeekerResult<EmbeddingModel> {
    match name.to_ascii_lowercase().as_str() {
        "all-minilm-l6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        "bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        "bge-base-en-v1.5" => Ok(EmbeddingModel::BGEBaseENV15),
        other => Err(EmbeddingError::ModelLoadFailed {
            model: other.to_string(),
            reason: "unsupported fastembed embedding model".to_string(),
        }
        .into()),
    }
}

impl IEmbeddingProvider for FastEmbedProvider {
    fn embed(&self, text: &str) -> SeekerResult<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput.into());
        }
        self.infer(vec![text])?
            .pop()
            .ok_or_else(|| {
                EmbeddingError::InferenceFailed {
                    reason: "model returned no embedding".to_string(),
                }
                .into()
            })
    }

    fn embed_batch(&self, texts: &[String]) -> SeekerResult<Vec<Vec<f32>>> {
        if texts.is_empty() || texts.iter().any(|t| t.trim().is_empty()) {
            return Err(EmbeddingError::EmptyInput.into());
        }
        self.infer(texts.iter().map(String::as_str).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
