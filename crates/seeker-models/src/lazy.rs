//! Lazily loaded, process-wide model handles.
//!
//! A `LazyModel` is built once at startup and passed explicitly to whatever
//! needs the model. The first `get()` runs the loader on the inference pool;
//! concurrent first callers wait on the same initialization, so a successful
//! load happens at most once. A failed load leaves the cell empty and the
//! next caller tries again.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use seeker_core::errors::SeekerResult;
use seeker_observability::tracing_setup::events;
use tokio::sync::OnceCell;

use crate::pool::InferencePool;

/// Builds a model. Runs on a blocking worker, so it may do file or network I/O.
pub type ModelLoader<M> = Arc<dyn Fn() -> SeekerResult<Arc<M>> + Send + Sync>;

/// A model handle loaded on first use and shared read-only afterwards.
pub struct LazyModel<M: ?Sized> {
    kind: &'static str,
    name: String,
    cell: OnceCell<Arc<M>>,
    loader: ModelLoader<M>,
    pool: InferencePool,
    loads: AtomicUsize,
}

impl<M> LazyModel<M>
where
    M: ?Sized + Send + Sync + 'static,
{
    pub fn new(
        kind: &'static str,
        name: impl Into<String>,
        pool: InferencePool,
        loader: ModelLoader<M>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            cell: OnceCell::new(),
            loader,
            pool,
            loads: AtomicUsize::new(0),
        }
    }

    /// A handle around an already constructed model. `get()` never loads.
    pub fn preloaded(kind: &'static str, name: impl Into<String>, pool: InferencePool, model: Arc<M>) -> Self {
        let loaded = Arc::clone(&model);
        let loader: ModelLoader<M> = Arc::new(move || Ok(Arc::clone(&loaded)));
        Self {
            kind,
            name: name.into(),
            cell: OnceCell::new_with(Some(model)),
            loader,
            pool,
            loads: AtomicUsize::new(0),
        }
    }

    /// The shared model, loading it on first use.
    pub async fn get(&self) -> SeekerResult<Arc<M>> {
        let model = self
            .cell
            .get_or_try_init(|| async {
                let loader = Arc::clone(&self.loader);
                let model = self.pool.run("model_load", move || loader()).await?;
                self.loads.fetch_add(1, Ordering::SeqCst);
                events::model_loaded(self.kind, &self.name);
                Ok::<_, seeker_core::SeekerError>(model)
            })
            .await?;
        Ok(Arc::clone(model))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Number of loader runs that completed successfully.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl<M: ?Sized> fmt::Debug for LazyModel<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyModel")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("loaded", &self.cell.initialized())
            .finish()
    }
}
