//! Search stages and rank fusion.

pub mod chunk_search;
pub mod document_search;
pub mod record_search;
pub mod rrf_fusion;

pub use chunk_search::ChunkSearch;
pub use document_search::{best_chunk_per_parent, DocumentSearch};
pub use record_search::{RecordSearch, TextExtractor};
pub use rrf_fusion::ReciprocalRankFusion;
