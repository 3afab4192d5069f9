use seeker_core::errors::*;

#[test]
fn invalid_input_carries_reason() {
    let err = SeekerError::invalid_input("top_k must be at least 1");
    assert!(err.to_string().contains("top_k must be at least 1"));
    assert!(err.is_invalid_input());
    assert!(!err.is_collaborator_failure());
}

#[test]
fn config_error_is_not_a_collaborator_failure() {
    let err = SeekerError::ConfigError("bad".into());
    assert!(!err.is_collaborator_failure());
    assert!(!err.is_invalid_input());
}

// --- From impls ---

#[test]
fn embedding_error_converts_to_seeker_error() {
    let emb_err = EmbeddingError::DimensionMismatch {
        expected: 384,
        actual: 768,
    };
    let err: SeekerError = emb_err.into();
    assert!(matches!(err, SeekerError::EmbeddingError(_)));
    assert!(err.is_collaborator_failure());
}

#[test]
fn retrieval_error_converts_to_seeker_error() {
    let ret_err = RetrievalError::SearchFailed {
        source_name: "vector".into(),
        reason: "connection reset".into(),
    };
    let err: SeekerError = ret_err.into();
    assert!(matches!(err, SeekerError::RetrievalError(_)));
    assert!(err.is_collaborator_failure());
}

#[test]
fn serialization_error_converts_to_seeker_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: SeekerError = json_err.into();
    assert!(matches!(err, SeekerError::SerializationError(_)));
}

#[test]
fn worker_pool_error_is_a_collaborator_failure() {
    let err = SeekerError::WorkerPool {
        reason: "task panicked".into(),
    };
    assert!(err.is_collaborator_failure());
}

// --- Sub-error variants carry context ---

#[test]
fn model_load_failed_carries_model_and_reason() {
    let err = EmbeddingError::ModelLoadFailed {
        model: "bge-reranker-base".into(),
        reason: "download refused".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("bge-reranker-base"));
    assert!(msg.contains("download refused"));
}

#[test]
fn dimension_mismatch_carries_sizes() {
    let err = EmbeddingError::DimensionMismatch {
        expected: 384,
        actual: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("384"));
    assert!(msg.contains('3'));
}

#[test]
fn search_failed_carries_source_name() {
    let err = RetrievalError::SearchFailed {
        source_name: "trigram".into(),
        reason: "timeout".into(),
    };
    assert!(err.to_string().starts_with("trigram search failed"));
}
