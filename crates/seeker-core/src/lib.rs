//! # seeker-core
//!
//! Foundation crate for the Seeker retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SeekerConfig;
pub use errors::{SeekerError, SeekerResult};
pub use models::{
    Chunk, ClientRecord, Document, ResultKind, Score, ScoreSource, ScoredItem, SearchRequest,
    UnifiedEntity, UnifiedResult,
};
