//! Structured log events for search and model operations.
//!
//! Each function emits one `tracing` event with an `event` field naming it.

use std::fmt::Display;

/// A UnifiedSearch branch failed and contributes no results.
pub fn branch_failed(branch: &str, error: &dyn Display) {
    tracing::error!(
        event = "branch_failed",
        branch = %branch,
        error = %error,
        "search branch failed; continuing without it"
    );
}

/// A search stage finished.
pub fn search_completed(kind: &str, returned: usize, top_k: usize) {
    tracing::info!(
        event = "search_completed",
        kind = %kind,
        returned,
        top_k,
        "search completed"
    );
}

/// A chunk's parent document could not be resolved and was dropped.
pub fn document_unresolved(document_id: &dyn Display) {
    tracing::warn!(
        event = "document_unresolved",
        document_id = %document_id,
        "document not found for chunk parent; dropping it"
    );
}

/// A model finished loading.
pub fn model_loaded(kind: &str, name: &str) {
    tracing::info!(
        event = "model_loaded",
        kind = %kind,
        name = %name,
        "model loaded"
    );
}
