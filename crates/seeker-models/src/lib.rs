//! # seeker-models
//!
//! Model plumbing for the Seeker retrieval engine: embedding and
//! cross-encoder providers, process-wide lazily loaded model handles,
//! the bounded inference pool, and the query-embedding cache.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine (IEmbedder)          CrossEncoderEngine (IRelevanceModel)
//! ├── LazyModel<dyn IEmbeddingProvider> └── LazyModel<dyn ICrossEncoder>
//! │   ├── FastEmbedProvider (feature)       ├── FastEmbedCrossEncoder (feature)
//! │   └── HashEmbedder (always)             └── TermOverlapScorer (always)
//! ├── QueryCache (moka, blake3 keys)
//! └── InferencePool (Semaphore + spawn_blocking)
//! ```

pub mod cache;
pub mod engine;
pub mod lazy;
pub mod pool;
pub mod providers;

pub use cache::QueryCache;
pub use engine::{CrossEncoderEngine, EmbeddingEngine};
pub use lazy::{LazyModel, ModelLoader};
pub use pool::InferencePool;
pub use providers::{HashEmbedder, TermOverlapScorer};

#[cfg(feature = "fastembed")]
pub use providers::{FastEmbedCrossEncoder, FastEmbedProvider};
