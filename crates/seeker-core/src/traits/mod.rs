//! Collaborator contracts consumed by the ranking engine.
//!
//! Model providers (`IEmbeddingProvider`, `ICrossEncoder`) are synchronous and
//! CPU bound. The async traits are what search stages await; implementations
//! offload model work so the orchestrating task never blocks.

mod embedding;
mod relevance;
mod repository;
mod retrieval;
mod search_stage;

pub use embedding::{IEmbedder, IEmbeddingProvider};
pub use relevance::{ICrossEncoder, IRelevanceModel};
pub use repository::IDocumentRepository;
pub use retrieval::{IChunkRetrieval, IFuzzyRetrieval, IKeywordRetrieval};
pub use search_stage::ISearchStage;
