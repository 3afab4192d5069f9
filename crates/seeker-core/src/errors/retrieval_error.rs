/// Retrieval, ranking and repository errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("{source_name} search failed: {reason}")]
    SearchFailed { source_name: String, reason: String },

    #[error("ranking failed: {reason}")]
    RankingFailed { reason: String },

    #[error("repository lookup failed: {reason}")]
    RepositoryFailed { reason: String },
}
