//! UnifiedSearch and engine assembly.
//!
//! UnifiedSearch runs document and record search as concurrent tasks over the
//! same request, absorbs a failed or panicked branch as zero results, and
//! merges both result sets into one ranked list. `SearchStack` wires every
//! stage from config and explicitly passed collaborators.

use std::sync::Arc;

use seeker_core::config::SearchConfig;
use seeker_core::constants::log_query;
use seeker_core::errors::{SeekerError, SeekerResult};
use seeker_core::traits::{
    IChunkRetrieval, IDocumentRepository, IEmbedder, IFuzzyRetrieval, IKeywordRetrieval,
    IRelevanceModel, ISearchStage,
};
use seeker_core::{
    ClientRecord, Document, ResultKind, ScoredItem, SearchRequest, SeekerConfig, UnifiedEntity,
    UnifiedResult,
};
use seeker_models::{CrossEncoderEngine, EmbeddingEngine, InferencePool};
use seeker_observability::tracing_setup::events;
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};

use crate::ranking::Reranker;
use crate::search::{ChunkSearch, DocumentSearch, RecordSearch, ReciprocalRankFusion};

pub struct UnifiedSearch {
    documents: Arc<dyn ISearchStage<Document>>,
    records: Arc<dyn ISearchStage<ClientRecord>>,
    config: SearchConfig,
}

impl UnifiedSearch {
    pub fn new(
        documents: Arc<dyn ISearchStage<Document>>,
        records: Arc<dyn ISearchStage<ClientRecord>>,
        config: SearchConfig,
    ) -> Self {
        Self {
            documents,
            records,
            config,
        }
    }

    /// Search both branches and merge.
    ///
    /// Never fails: each branch runs as its own task, and a branch that
    /// errors or panics is logged and contributes nothing. Results are sorted
    /// by score (ties keep records before documents, then branch order),
    /// truncated to `top_k`, and ranked from 1.
    pub async fn search(&self, request: &SearchRequest) -> Vec<UnifiedResult> {
        let documents = spawn_branch(Arc::clone(&self.documents), request.clone());
        let records = spawn_branch(Arc::clone(&self.records), request.clone());
        let (documents, records) = tokio::join!(documents, records);
        let documents = settle(self.documents.name(), joined(documents));
        let records = settle(self.records.name(), joined(records));

        let mut merged: Vec<(ResultKind, f64, UnifiedEntity)> =
            Vec::with_capacity(documents.len() + records.len());
        merged.extend(
            records
                .into_iter()
                .map(|r| (ResultKind::Record, r.value(), UnifiedEntity::Record(r.item))),
        );
        merged.extend(documents.into_iter().map(|d| {
            (ResultKind::Document, d.value(), UnifiedEntity::Document(d.item))
        }));

        merged.sort_by(|a, b| b.1.total_cmp(&a.1));
        merged.truncate(request.top_k());

        let results: Vec<UnifiedResult> = merged
            .into_iter()
            .enumerate()
            .map(|(i, (kind, score, entity))| UnifiedResult {
                kind,
                entity,
                score,
                rank: i + 1,
            })
            .collect();

        info!(query = log_query(request.query()), "unified search merged");
        events::search_completed("unified", results.len(), request.top_k());
        results
    }

    /// Text entry point: validates the arguments into a [`SearchRequest`].
    ///
    /// `top_k` defaults to `search.default_top_k` and may not exceed
    /// `search.max_top_k`.
    pub async fn search_text(
        &self,
        query: &str,
        top_k: Option<usize>,
        threshold: Option<f64>,
    ) -> SeekerResult<Vec<UnifiedResult>> {
        let top_k = top_k.unwrap_or(self.config.default_top_k);
        if top_k > self.config.max_top_k {
            return Err(SeekerError::invalid_input(format!(
                "top_k {top_k} exceeds the maximum of {}",
                self.config.max_top_k
            )));
        }
        let request = SearchRequest::new(query, top_k, threshold)?;
        Ok(self.search(&request).await)
    }
}

type BranchOutcome<T> = Result<SeekerResult<Vec<ScoredItem<T>>>, JoinError>;

fn spawn_branch<T>(
    stage: Arc<dyn ISearchStage<T>>,
    request: SearchRequest,
) -> JoinHandle<SeekerResult<Vec<ScoredItem<T>>>>
where
    T: Send + 'static,
{
    tokio::spawn(async move { stage.search(&request).await })
}

/// A branch task that panicked or was cancelled counts as a failed branch.
fn joined<T>(outcome: BranchOutcome<T>) -> SeekerResult<Vec<ScoredItem<T>>> {
    outcome.unwrap_or_else(|e| {
        Err(SeekerError::WorkerPool {
            reason: format!("search branch did not complete: {e}"),
        })
    })
}

fn settle<T>(branch: &str, outcome: SeekerResult<Vec<ScoredItem<T>>>) -> Vec<ScoredItem<T>> {
    match outcome {
        Ok(items) => items,
        Err(e) => {
            warn!(
                branch,
                collaborator = e.is_collaborator_failure(),
                "branch contributes no results"
            );
            events::branch_failed(branch, &e);
            Vec::new()
        }
    }
}

/// Collaborators the stack is built from. Nothing is looked up globally.
#[derive(Clone)]
pub struct SearchCollaborators {
    pub embedder: Arc<dyn IEmbedder>,
    pub chunks: Arc<dyn IChunkRetrieval>,
    pub keywords: Option<Arc<dyn IKeywordRetrieval>>,
    pub clients: Arc<dyn IFuzzyRetrieval<ClientRecord>>,
    pub documents: Arc<dyn IDocumentRepository>,
    pub relevance: Option<Arc<dyn IRelevanceModel>>,
}

impl SearchCollaborators {
    /// Storage collaborators plus embedding and cross-encoder engines built
    /// from config, sharing one inference pool.
    pub fn with_models(
        config: &SeekerConfig,
        chunks: Arc<dyn IChunkRetrieval>,
        clients: Arc<dyn IFuzzyRetrieval<ClientRecord>>,
        documents: Arc<dyn IDocumentRepository>,
    ) -> Self {
        let pool = InferencePool::from_config(&config.inference);
        let embedder: Arc<dyn IEmbedder> =
            Arc::new(EmbeddingEngine::from_config(&config.embedding, pool.clone()));
        let relevance = config.reranker.enabled.then(|| {
            Arc::new(CrossEncoderEngine::from_config(&config.reranker, pool)) as Arc<dyn IRelevanceModel>
        });
        Self {
            embedder,
            chunks,
            keywords: None,
            clients,
            documents,
            relevance,
        }
    }

    pub fn with_keywords(mut self, keywords: Arc<dyn IKeywordRetrieval>) -> Self {
        self.keywords = Some(keywords);
        self
    }
}

/// Every search stage, wired once and shared.
pub struct SearchStack {
    pub chunk_search: Arc<ChunkSearch>,
    pub document_search: Arc<DocumentSearch>,
    pub record_search: Arc<RecordSearch<ClientRecord>>,
    pub unified: UnifiedSearch,
}

impl SearchStack {
    pub fn from_config(config: &SeekerConfig, collaborators: SearchCollaborators) -> SeekerResult<Self> {
        config.validate()?;

        let reranker = match (config.reranker.enabled, collaborators.relevance) {
            (true, Some(model)) => Some(Reranker::new(model)),
            (true, None) => {
                warn!("reranker enabled but no relevance model supplied; searching without it");
                None
            }
            (false, _) => None,
        };

        let mut chunk_search = ChunkSearch::new(
            collaborators.embedder,
            collaborators.chunks,
            config.chunk_search.clone(),
        );
        match (config.chunk_search.hybrid_keyword, collaborators.keywords) {
            (true, Some(keywords)) => {
                chunk_search = chunk_search
                    .with_keyword_retrieval(keywords, ReciprocalRankFusion::from_config(&config.rrf));
            }
            (true, None) => warn!("hybrid keyword search enabled but no keyword retrieval supplied"),
            (false, _) => {}
        }
        if let Some(reranker) = &reranker {
            chunk_search = chunk_search.with_reranker(reranker.clone());
        }
        let chunk_search = Arc::new(chunk_search);

        let document_search = Arc::new(DocumentSearch::new(
            chunk_search.clone(),
            collaborators.documents,
            &config.document_search,
        ));

        let mut record_search =
            RecordSearch::clients(collaborators.clients, config.record_search.clone());
        if let Some(reranker) = reranker {
            record_search = record_search.with_reranker(reranker);
        }
        let record_search = Arc::new(record_search);

        let unified = UnifiedSearch::new(
            document_search.clone(),
            record_search.clone(),
            config.search.clone(),
        );

        info!(
            reranker = chunk_search.has_reranker(),
            hybrid = chunk_search.is_hybrid(),
            "search stack assembled"
        );

        Ok(Self {
            chunk_search,
            document_search,
            record_search,
            unified,
        })
    }
}
