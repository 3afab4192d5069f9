/// Seeker version string.
pub const SEEKER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of cosine similarity.
pub const MIN_SIMILARITY: f64 = -1.0;

/// Upper bound of cosine similarity.
pub const MAX_SIMILARITY: f64 = 1.0;

/// Upper bound of trigram similarity. The lower bound is 0.
pub const MAX_TRIGRAM_SIMILARITY: f64 = 1.0;

/// Query text is truncated to this many characters in log output.
pub const LOG_QUERY_CHARS: usize = 100;

/// Truncate a query for logging without splitting a UTF-8 character.
pub fn log_query(query: &str) -> &str {
    match query.char_indices().nth(LOG_QUERY_CHARS) {
        Some((idx, _)) => &query[..idx],
        None => query,
    }
}
