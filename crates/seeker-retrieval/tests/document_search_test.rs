//! DocumentSearch: chunk widening, max-score aggregation and unresolved parents.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use seeker_core::config::DocumentSearchConfig;
use seeker_core::errors::SeekerResult;
use seeker_core::traits::ISearchStage;
use seeker_core::{Chunk, Document, ScoreSource, ScoredItem, SearchRequest};
use seeker_retrieval::DocumentSearch;
use test_fixtures::{Failing, InMemoryDocumentStore};
use uuid::Uuid;

/// Chunk stage returning fixed results and recording each requested `top_k`.
struct RecordingChunks {
    results: Vec<ScoredItem<Chunk>>,
    requested: Mutex<Vec<usize>>,
}

#[async_trait]
impl ISearchStage<Chunk> for RecordingChunks {
    async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        self.requested.lock().unwrap().push(request.top_k());
        Ok(self.results.iter().take(request.top_k()).cloned().collect())
    }

    fn name(&self) -> &str {
        "chunks"
    }
}

fn scored(parent: &Document, index: u32, value: f64) -> ScoredItem<Chunk> {
    ScoredItem::new(
        Chunk::new(parent.id, index, format!("{} #{index}", parent.title)),
        ScoreSource::CrossEncoder.of(value),
    )
}

fn doc(title: &str) -> Document {
    Document::new(Uuid::new_v4(), title)
}

fn stage(results: Vec<ScoredItem<Chunk>>) -> Arc<RecordingChunks> {
    Arc::new(RecordingChunks {
        results,
        requested: Mutex::new(Vec::new()),
    })
}

#[tokio::test]
async fn requests_five_chunks_per_document() {
    let memo = doc("memo");
    let chunks = stage(vec![scored(&memo, 0, 0.5)]);
    let search = DocumentSearch::new(
        chunks.clone(),
        Arc::new(InMemoryDocumentStore::new(vec![memo])),
        &DocumentSearchConfig::default(),
    );

    search.search(&SearchRequest::new("memo", 2, None).unwrap()).await.unwrap();
    assert_eq!(*chunks.requested.lock().unwrap(), vec![10]);
}

#[tokio::test]
async fn document_takes_its_best_chunk_score() {
    let memo = doc("memo");
    let bond = doc("bond");
    let chunks = stage(vec![
        scored(&memo, 0, 0.4),
        scored(&bond, 0, 0.8),
        scored(&memo, 1, 0.9),
        scored(&bond, 1, 0.1),
    ]);
    let search = DocumentSearch::new(
        chunks,
        Arc::new(InMemoryDocumentStore::new(vec![memo.clone(), bond.clone()])),
        &DocumentSearchConfig::default(),
    );

    let results = search.search(&SearchRequest::new("q", 5, None).unwrap()).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item.id, memo.id);
    assert_eq!(results[0].value(), 0.9);
    assert_eq!(results[0].source(), ScoreSource::CrossEncoder);
    assert_eq!(results[1].item.id, bond.id);
    assert_eq!(results[1].value(), 0.8);
}

#[tokio::test]
async fn truncates_to_top_k_before_lookup() {
    let docs: Vec<Document> = (0..4).map(|i| doc(&format!("d{i}"))).collect();
    let chunks = stage(
        docs.iter()
            .enumerate()
            .map(|(i, d)| scored(d, 0, 1.0 - i as f64 * 0.1))
            .collect(),
    );
    let store = Arc::new(InMemoryDocumentStore::new(docs.clone()));
    let search = DocumentSearch::new(chunks, store.clone(), &DocumentSearchConfig::default());

    let results = search.search(&SearchRequest::new("q", 2, None).unwrap()).await.unwrap();
    let ids: Vec<_> = results.iter().map(|r| r.item.id).collect();
    assert_eq!(ids, vec![docs[0].id, docs[1].id]);
    assert_eq!(store.calls.get(), 1);
}

#[tokio::test]
async fn unresolved_documents_are_dropped() {
    let known = doc("known");
    let missing = doc("missing");
    let chunks = stage(vec![scored(&missing, 0, 0.99), scored(&known, 0, 0.5)]);
    let search = DocumentSearch::new(
        chunks,
        Arc::new(InMemoryDocumentStore::new(vec![known.clone()])),
        &DocumentSearchConfig::default(),
    );

    let results = search.search(&SearchRequest::new("q", 3, None).unwrap()).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.id, known.id);
}

#[tokio::test]
async fn no_chunks_skips_the_repository() {
    let store = Arc::new(InMemoryDocumentStore::new(Vec::new()));
    let search = DocumentSearch::new(stage(Vec::new()), store.clone(), &DocumentSearchConfig::default());
    let results = search.search(&SearchRequest::new("q", 3, None).unwrap()).await.unwrap();
    assert!(results.is_empty());
    assert_eq!(store.calls.get(), 0);
}

#[tokio::test]
async fn repository_failure_propagates() {
    let memo = doc("memo");
    let search = DocumentSearch::new(
        stage(vec![scored(&memo, 0, 0.5)]),
        Arc::new(Failing::default()),
        &DocumentSearchConfig::default(),
    );
    let err = search.search(&SearchRequest::new("q", 1, None).unwrap()).await.unwrap_err();
    assert!(err.is_collaborator_failure());
}

#[tokio::test]
async fn zero_multiplier_still_requests_top_k_chunks() {
    let memo = doc("memo");
    let chunks = stage(vec![scored(&memo, 0, 0.5)]);
    let config = DocumentSearchConfig {
        chunk_retrieval_multiplier: 0,
    };
    let search = DocumentSearch::new(
        chunks.clone(),
        Arc::new(InMemoryDocumentStore::new(vec![memo])),
        &config,
    );

    let results = search.search(&SearchRequest::new("memo", 2, None).unwrap()).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(*chunks.requested.lock().unwrap(), vec![2]);
}
