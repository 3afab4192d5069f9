use async_trait::async_trait;

use crate::errors::SeekerResult;
use crate::models::{ScoredItem, SearchRequest};

/// One ranked search over a single entity type.
#[async_trait]
pub trait ISearchStage<T>: Send + Sync {
    /// At most `request.top_k()` items, highest score first.
    async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<T>>>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}
