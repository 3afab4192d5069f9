//! Domain types flowing through the retrieval pipeline.

mod chunk;
mod client;
mod document;
mod score;
pub mod scored;
mod search_request;
mod unified_result;

pub use chunk::Chunk;
pub use client::ClientRecord;
pub use document::{Document, DocumentStatus};
pub use score::{Score, ScoreSource};
pub use scored::ScoredItem;
pub use search_request::SearchRequest;
pub use unified_result::{ResultKind, UnifiedEntity, UnifiedResult};
