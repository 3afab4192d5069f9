//! Second-stage ranking.

pub mod reranker;

pub use reranker::Reranker;
