//! Error types. `SeekerError` is the only error that crosses crate seams;
//! sub-system errors convert into it via `From`.

mod embedding_error;
mod retrieval_error;
mod seeker_error;

pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use seeker_error::{SeekerError, SeekerResult};
