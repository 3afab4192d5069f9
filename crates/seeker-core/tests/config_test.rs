use seeker_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SeekerConfig::from_toml("").unwrap();

    // Search defaults
    assert_eq!(config.search.default_top_k, 3);
    assert_eq!(config.search.max_top_k, 100);

    // Embedding defaults
    assert_eq!(config.embedding.provider, "fastembed");
    assert_eq!(config.embedding.model_name, "all-minilm-l6-v2");
    assert_eq!(config.embedding.dimensions, 384);

    // Reranker defaults
    assert!(config.reranker.enabled);
    assert_eq!(config.reranker.model_name, "bge-reranker-base");

    // Retrieval defaults
    assert_eq!(config.rrf.k, 60);
    assert_eq!(config.chunk_search.retrieval_multiplier_with_rerank, 3);
    assert_eq!(config.chunk_search.retrieval_multiplier_no_rerank, 1);
    assert_eq!(config.chunk_search.default_similarity_threshold, None);
    assert_eq!(config.chunk_search.reranker_score_threshold, None);
    assert!(!config.chunk_search.hybrid_keyword);
    assert_eq!(config.document_search.chunk_retrieval_multiplier, 5);
    assert_eq!(config.record_search.trigram_threshold, 0.32);
    assert_eq!(config.record_search.retrieval_multiplier, 3);
    assert_eq!(config.record_search.reranker_score_threshold, 2.0);

    // Inference + observability defaults
    assert_eq!(config.inference.max_concurrency, 4);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[search]
default_top_k = 10

[record_search]
reranker_score_threshold = 1.5

[chunk_search]
reranker_score_threshold = 2.0
hybrid_keyword = true
"#;
    let config = SeekerConfig::from_toml(toml).unwrap();
    assert_eq!(config.search.default_top_k, 10);
    assert_eq!(config.search.max_top_k, 100); // default
    assert_eq!(config.record_search.reranker_score_threshold, 1.5);
    assert_eq!(config.record_search.trigram_threshold, 0.32); // default
    assert_eq!(config.chunk_search.reranker_score_threshold, Some(2.0));
    assert!(config.chunk_search.hybrid_keyword);
}

#[test]
fn config_rejects_zero_multiplier() {
    let err = SeekerConfig::from_toml("[document_search]\nchunk_retrieval_multiplier = 0\n")
        .unwrap_err();
    assert!(err.to_string().contains("chunk_retrieval_multiplier"));
}

#[test]
fn config_rejects_default_top_k_above_max() {
    let toml = "[search]\ndefault_top_k = 50\nmax_top_k = 10\n";
    assert!(SeekerConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_out_of_range_trigram_threshold() {
    assert!(SeekerConfig::from_toml("[record_search]\ntrigram_threshold = 1.5\n").is_err());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = SeekerConfig::from_toml("[search\n").unwrap_err();
    assert!(matches!(err, seeker_core::SeekerError::ConfigError(_)));
}

#[test]
fn config_serde_roundtrip() {
    let config = SeekerConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = SeekerConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.rrf.k, config.rrf.k);
    assert_eq!(
        roundtripped.embedding.dimensions,
        config.embedding.dimensions
    );
}
