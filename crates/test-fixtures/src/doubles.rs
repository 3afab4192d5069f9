//! Scripted, static and failing collaborators with call counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use seeker_core::errors::{RetrievalError, SeekerResult};
use seeker_core::traits::{
    IChunkRetrieval, IDocumentRepository, IEmbedder, IFuzzyRetrieval, IKeywordRetrieval,
    IRelevanceModel, ISearchStage,
};
use seeker_core::{Chunk, Document, ScoredItem, SearchRequest};
use uuid::Uuid;

/// Shared call counter; clones observe the same count.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Embedder returning the same vector for every input.
pub struct StaticEmbedder {
    vector: Vec<f32>,
    pub calls: CallCounter,
}

impl StaticEmbedder {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            calls: CallCounter::default(),
        }
    }
}

#[async_trait]
impl IEmbedder for StaticEmbedder {
    async fn embed_query(&self, _text: &str) -> SeekerResult<Vec<f32>> {
        self.calls.hit();
        Ok(self.vector.clone())
    }

    async fn embed_batch(&self, texts: &[String]) -> SeekerResult<Vec<Vec<f32>>> {
        self.calls.hit();
        Ok(vec![self.vector.clone(); texts.len()])
    }

    fn dimensions(&self) -> usize {
        self.vector.len()
    }
}

/// Relevance model that looks scores up by exact candidate text.
///
/// Unknown texts get `default_score`. Optionally returns a wrong number of
/// scores to exercise count checks.
pub struct ScriptedRelevanceModel {
    scores: HashMap<String, f64>,
    default_score: f64,
    drop_last: bool,
    pub calls: CallCounter,
}

impl ScriptedRelevanceModel {
    pub fn new(default_score: f64) -> Self {
        Self {
            scores: HashMap::new(),
            default_score,
            drop_last: false,
            calls: CallCounter::default(),
        }
    }

    pub fn with_score(mut self, text: impl Into<String>, score: f64) -> Self {
        self.scores.insert(text.into(), score);
        self
    }

    /// Return one score fewer than asked for.
    pub fn short_by_one(mut self) -> Self {
        self.drop_last = true;
        self
    }
}

#[async_trait]
impl IRelevanceModel for ScriptedRelevanceModel {
    async fn score(&self, _query: &str, texts: &[String]) -> SeekerResult<Vec<f64>> {
        self.calls.hit();
        let mut scores: Vec<f64> = texts
            .iter()
            .map(|t| self.scores.get(t).copied().unwrap_or(self.default_score))
            .collect();
        if self.drop_last {
            scores.pop();
        }
        Ok(scores)
    }
}

/// Search stage returning a fixed list.
pub struct StaticStage<T> {
    name: String,
    items: Vec<ScoredItem<T>>,
    pub calls: CallCounter,
}

impl<T> StaticStage<T> {
    pub fn new(name: impl Into<String>, items: Vec<ScoredItem<T>>) -> Self {
        Self {
            name: name.into(),
            items,
            calls: CallCounter::default(),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> ISearchStage<T> for StaticStage<T> {
    async fn search(&self, request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<T>>> {
        self.calls.hit();
        Ok(self.items.iter().take(request.top_k()).cloned().collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Collaborator that fails every call. Implements every contract.
pub struct Failing {
    reason: String,
    pub calls: CallCounter,
}

impl Failing {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            calls: CallCounter::default(),
        }
    }

    fn fail<T>(&self, source_name: &str) -> SeekerResult<T> {
        self.calls.hit();
        Err(RetrievalError::SearchFailed {
            source_name: source_name.to_string(),
            reason: self.reason.clone(),
        }
        .into())
    }
}

impl Default for Failing {
    fn default() -> Self {
        Self::new("collaborator unavailable")
    }
}

#[async_trait]
impl IEmbedder for Failing {
    async fn embed_query(&self, _text: &str) -> SeekerResult<Vec<f32>> {
        self.fail("embedder")
    }

    async fn embed_batch(&self, _texts: &[String]) -> SeekerResult<Vec<Vec<f32>>> {
        self.fail("embedder")
    }

    fn dimensions(&self) -> usize {
        0
    }
}

#[async_trait]
impl IChunkRetrieval for Failing {
    async fn search_by_vector(
        &self,
        _vector: &[f32],
        _limit: usize,
        _threshold: Option<f64>,
    ) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        self.fail("vector")
    }
}

#[async_trait]
impl IKeywordRetrieval for Failing {
    async fn search_by_keyword(
        &self,
        _query: &str,
        _limit: usize,
    ) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        self.fail("keyword")
    }
}

#[async_trait]
impl<R: Send + 'static> IFuzzyRetrieval<R> for Failing {
    async fn search(
        &self,
        _query: &str,
        _threshold: f64,
        _limit: Option<usize>,
    ) -> SeekerResult<Vec<ScoredItem<R>>> {
        self.fail("trigram")
    }
}

#[async_trait]
impl IDocumentRepository for Failing {
    async fn get_by_ids(&self, _ids: &[Uuid]) -> SeekerResult<Vec<Document>> {
        self.fail("documents")
    }
}

#[async_trait]
impl IRelevanceModel for Failing {
    async fn score(&self, _query: &str, _texts: &[String]) -> SeekerResult<Vec<f64>> {
        self.fail("cross_encoder")
    }
}

#[async_trait]
impl<T: Send + Sync + 'static> ISearchStage<T> for Failing {
    async fn search(&self, _request: &SearchRequest) -> SeekerResult<Vec<ScoredItem<T>>> {
        self.fail("stage")
    }

    fn name(&self) -> &str {
        "failing"
    }
}
