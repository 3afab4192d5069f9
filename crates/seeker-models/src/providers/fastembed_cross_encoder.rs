//! Cross-encoder reranking via fastembed `TextRerank`.

use std::sync::Mutex;

use fastembed::{RerankInitOptions, RerankerModel, TextRerank};
use seeker_core::errors::{RetrievalError, SeekerResult};
use seeker_core::traits::ICrossEncoder;
use tracing::debug;

pub struct FastEmbedCrossEncoder {
    model: Mutex<TextRerank>,
    model_name: String,
}

impl FastEmbedCrossEncoder {
    pub fn load(model_name: &str) -> SeekerResult<Self> {
        let model = TextRerank::try_new(
            RerankInitOptions::new(reranker_model(model_name)?).with_show_download_progress(false),
        )
        .map_err(|e| seeker_core::errors::EmbeddingError::ModelLoadFailed {
            model: model_name.to_string(),
            reason: e.to_string(),
        })?;

        debug!(model = %model_name, "fastembed reranker loaded");

        Ok(Self {
            model: Mutex::new(model),
            model_name: model_name.to_string(),
        })
    }
}

fn reranker_model(name: &str) -> SeekerResult<RerankerModel> {
    match name.to_ascii_lowercase().as_str() {
        "bge-reranker-base" => Ok(RerankerModel::BGERerankerBase),
        "bge-reranker-v2-m3" => Ok(RerankerModel::BGERerankerV2M3),
        "jina-reranker-v1-turbo-en" => Ok(RerankerModel::JINARerankerV1TurboEn),
        other => Err(seeker_core::errors::EmbeddingError::ModelLoadFailed {
            model: other.to_string(),
            reason: "unsupported fastembed reranker model".to_string(),
        }
        .into()),
    }
}

impl ICrossEncoder for FastEmbedCrossEncoder {
    /// Raw relevance logits, mapped back to input order by result index.
    fn score_pairs(&self, query: &str, texts: &[String]) -> SeekerResult<Vec<f64>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let documents: Vec<&str> = texts.iter().map(String::as_str).collect();

        let mut model = self.model.lock().map_err(|_| RetrievalError::RankingFailed {
            reason: format!("{} session lock poisoned", self.model_name),
        })?;
        let results = model
            .rerank(query, documents, false, None)
            .map_err(|e| RetrievalError::RankingFailed {
                reason: e.to_string(),
            })?;

        let mut scores: Vec<Option<f64>> = vec![None; texts.len()];
        for r in results {
            if let Some(slot) = scores.get_mut(r.index) {
                *slot = Some(f64::from(r.score));
            }
        }
        scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                s.ok_or_else(|| {
                    RetrievalError::RankingFailed {
                        reason: format!("reranker returned no score for candidate {i}"),
                    }
                    .into()
                })
            })
            .collect()
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
