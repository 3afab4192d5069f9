//! Document search: wide chunk search, max-score-wins aggregation per
//! parent document, then batch resolution of the documents.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use seeker_core::config::DocumentSearchConfig;
use seeker_core::constants::log_query;
use seeker_core::errors::SeekerResult;
use seeker_core::models::scored::sort_descending;
use seeker_core::traits::{IDocumentRepository, ISearchStage};
use seeker_core::{Chunk, Document, ScoredItem, SearchRequest};
use seeker_observability::tracing_setup::events;
use tracing::info;
use uuid::Uuid;

/// Keep the single best chunk per parent id.
///
/// A later chunk replaces the kept one only with a strictly greater score;
/// each parent keeps the position where it was first seen.
pub fn best_chunk_per_parent(results: Vec<ScoredItem<Chunk>>) -> Vec<ScoredItem<Chunk>> {
    let mut best: Vec<ScoredItem<Chunk>> = Vec::new();
    let mut slot: HashMap<Uuid, usize> = HashMap::new();
    for result in results {
        match slot.get(&result.item.parent_id) {
            Some(&i) => {
                if result.value() > best[i].value() {
                    best[i] = result;
                }
            }
            None => {
                slot.insert(result.item.parent_id, best.len());
                best.push(result);
            }
        }
    }
    best
}

pub struct DocumentSearch {
    chunks: Arc<dyn ISearchStage<Chunk>>,
    repository: Arc<dyn IDocumentRepository>,
    chunk_multiplier: NonZeroUsize,
}

impl DocumentSearch {
    pub fn new(
        chunks: Arc<dyn ISearchStage<Chunk>>,
        repository: Arc<dyn IDocumentRepository>,
        config: &DocumentSearchConfig,
    ) -> Self {
        Self {
            chunks,
            repository,
            chunk_multiplier: NonZeroUsize::new(config.chunk_retrieval_multiplier)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<Document>>> {
        let top_k = request.top_k();
        let chunk_request =
            request.with_top_k(request.non_zero_top_k().saturating_mul(self.chunk_multiplier));
        let chunk_results = self.chunks.search(&chunk_request).await?;
        let chunk_count = chunk_results.len();

        let mut best = best_chunk_per_parent(chunk_results);
        sort_descending(&mut best);
        best.truncate(top_k);
        if best.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = best.iter().map(|c| c.item.parent_id).collect();
        let mut documents: HashMap<Uuid, Document> = self
            .repository
            .get_by_ids(&ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        let results: Vec<ScoredItem<Document>> = best
            .into_iter()
            .filter_map(|chunk| {
                let parent_id = chunk.item.parent_id;
                match documents.remove(&parent_id) {
                    Some(document) => Some(chunk.map_item(|_| document)),
                    None => {
                        events::document_unresolved(&parent_id);
                        None
                    }
                }
            })
            .collect();

        info!(
            query = log_query(request.query()),
            chunks = chunk_count,
            parents = ids.len(),
            returned = results.len(),
            top_k,
            "document search complete"
        );
        Ok(results)
    }
}

#[async_trait]
impl ISearchStage<Document> for DocumentSearch {
    async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<Document>>> {
        DocumentSearch::search(self, request).await
    }

    fn name(&self) -> &str {
        "documents"
    }
}
