//! # seeker-retrieval
//!
//! The ranking engine. Multi-stage search over chunks, documents and client
//! records, cross-encoder reranking with a score audit trail, reciprocal rank
//! fusion, and a unified search that tolerates a failed branch.
//!
//! ## Architecture
//!
//! ```text
//! UnifiedSearch
//! ├── DocumentSearch (max-score-wins per parent)
//! │   └── ChunkSearch
//! │       ├── IEmbedder → IChunkRetrieval (vector)
//! │       ├── IKeywordRetrieval + RRF (optional hybrid)
//! │       └── Reranker (optional)
//! └── RecordSearch<ClientRecord>
//!     ├── IFuzzyRetrieval (trigram)
//!     └── Reranker (optional) → score threshold
//! ```

pub mod engine;
pub mod eval;
pub mod ranking;
pub mod search;

pub use engine::{SearchCollaborators, SearchStack, UnifiedSearch};
pub use ranking::Reranker;
pub use search::{ChunkSearch, DocumentSearch, RecordSearch, ReciprocalRankFusion};
