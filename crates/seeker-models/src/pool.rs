//! Bounded worker pool for synchronous model inference.
//!
//! Inference is CPU bound, so it never runs on the async scheduler. Each call
//! takes a semaphore permit and runs on tokio's blocking thread pool; calls
//! beyond `max_concurrency` wait for a permit.

use std::sync::Arc;

use seeker_core::config::InferenceConfig;
use seeker_core::errors::{SeekerError, SeekerResult};
use tokio::sync::Semaphore;
use tracing::debug;

/// Shared handle to the inference pool. Clones share the same permits.
#[derive(Debug, Clone)]
pub struct InferencePool {
    permits: Arc<Semaphore>,
    max_concurrency: usize,
}

impl InferencePool {
    pub fn new(max_concurrency: usize) -> Self {
        let max_concurrency = max_concurrency.max(1);
        Self {
            permits: Arc::new(Semaphore::new(max_concurrency)),
            max_concurrency,
        }
    }

    pub fn from_config(config: &InferenceConfig) -> Self {
        Self::new(config.max_concurrency)
    }

    /// Run `work` on a blocking worker once a permit is free.
    ///
    /// The permit moves into the worker, so it stays held until the work
    /// finishes even if the awaiting future is dropped.
    pub async fn run<T, F>(&self, task: &'static str, work: F) -> SeekerResult<T>
    where
        T: Send + 'static,
        F: FnOnce() -> SeekerResult<T> + Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| SeekerError::WorkerPool {
                reason: "inference pool is closed".to_string(),
            })?;

        debug!(task, available = self.permits.available_permits(), "inference dispatched");

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            work()
        })
        .await
        .map_err(|e| SeekerError::WorkerPool {
            reason: format!("{task} worker did not complete: {e}"),
        })?
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Permits not currently held by a running call.
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}

impl Default for InferencePool {
    fn default() -> Self {
        Self::from_config(&InferenceConfig::default())
    }
}
