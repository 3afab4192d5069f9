//! Offline retrieval evaluation.

pub mod metrics;

pub use metrics::{
    evaluate_run, ndcg_at_k, precision, precision_at_k, recall_at_k, reciprocal_rank,
    EvaluationMetrics,
};
