// Single source of truth for all default values.

// --- Search ---
pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_MAX_TOP_K: usize = 100;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";
pub const DEFAULT_EMBEDDING_MODEL: &str = "all-minilm-l6-v2";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 10_000;

// --- Reranker ---
pub const DEFAULT_RERANKER_ENABLED: bool = true;
pub const DEFAULT_RERANKER_PROVIDER: &str = "fastembed";
pub const DEFAULT_RERANKER_MODEL: &str = "bge-reranker-base";

// --- RRF ---
pub const DEFAULT_RRF_K: u32 = 60;

// --- Chunk search ---
pub const DEFAULT_CHUNK_MULTIPLIER_WITH_RERANK: usize = 3;
pub const DEFAULT_CHUNK_MULTIPLIER_NO_RERANK: usize = 1;
pub const DEFAULT_HYBRID_KEYWORD: bool = false;

// --- Document search ---
pub const DEFAULT_CHUNK_RETRIEVAL_MULTIPLIER: usize = 5;

// --- Record search ---
pub const DEFAULT_TRIGRAM_THRESHOLD: f64 = 0.32;
pub const DEFAULT_RECORD_RETRIEVAL_MULTIPLIER: usize = 3;
pub const DEFAULT_RECORD_RERANKER_THRESHOLD: f64 = 2.0;

// --- Inference ---
pub const DEFAULT_INFERENCE_CONCURRENCY: usize = 4;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
