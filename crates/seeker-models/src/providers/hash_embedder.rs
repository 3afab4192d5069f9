//! Deterministic hashed term-frequency embeddings.
//!
//! Terms and adjacent-term bigrams are hashed with blake3 into signed
//! buckets, then the vector is L2 normalized. Captures lexical overlap only,
//! but needs no model files and never fails on valid input.

use seeker_core::errors::{EmbeddingError, SeekerResult};
use seeker_core::traits::IEmbeddingProvider;

use super::terms;

const BIGRAM_WEIGHT: f32 = 0.5;

pub struct HashEmbedder {
    dimensions: usize,
}

impl HashEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Bucket index and sign for one feature.
    fn bucket(&self, feature: &str) -> (usize, f32) {
        let hash = blake3::hash(feature.as_bytes());
        let bytes = hash.as_bytes();
        let mut index = [0u8; 8];
        index.copy_from_slice(&bytes[..8]);
        let bucket = (u64::from_le_bytes(index) % self.dimensions as u64) as usize;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        (bucket, sign)
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = terms(text);
        let mut vector = vec![0.0f32; self.dimensions];

        for token in &tokens {
            let (bucket, sign) = self.bucket(token);
            vector[bucket] += sign;
        }
        for pair in tokens.windows(2) {
            let (bucket, sign) = self.bucket(&format!("{} {}", pair[0], pair[1]));
            vector[bucket] += sign * BIGRAM_WEIGHT;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

impl IEmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> SeekerResult<Vec<f32>> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput.into());
        }
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> SeekerResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hash"
    }
}
