//! In-memory collaborators with the same contracts as the production stores.

use std::collections::HashMap;

use async_trait::async_trait;
use seeker_core::errors::{RetrievalError, SeekerResult};
use seeker_core::models::scored::sort_descending;
use seeker_core::traits::{
    IChunkRetrieval, IDocumentRepository, IEmbeddingProvider, IFuzzyRetrieval, IKeywordRetrieval,
};
use seeker_core::{Chunk, ClientRecord, Document, ScoreSource, ScoredItem};
use uuid::Uuid;

use crate::doubles::CallCounter;
use crate::trigram;

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na <= f32::EPSILON || nb <= f32::EPSILON {
        return 0.0;
    }
    f64::from(dot / (na * nb))
}

/// Brute-force cosine search over chunks. Chunks without a vector are never returned.
pub struct InMemoryChunkIndex {
    dimensions: usize,
    entries: Vec<(Chunk, Option<Vec<f32>>)>,
    pub calls: CallCounter,
}

impl InMemoryChunkIndex {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            entries: Vec::new(),
            calls: CallCounter::default(),
        }
    }

    /// Index every chunk with a vector from `provider`.
    pub fn from_provider(chunks: &[Chunk], provider: &dyn IEmbeddingProvider) -> SeekerResult<Self> {
        let mut index = Self::new(provider.dimensions());
        for chunk in chunks {
            let vector = provider.embed(&chunk.content)?;
            index.insert(chunk.clone(), Some(vector));
        }
        Ok(index)
    }

    pub fn insert(&mut self, chunk: Chunk, vector: Option<Vec<f32>>) {
        self.entries.push((chunk, vector));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl IChunkRetrieval for InMemoryChunkIndex {
    async fn search_by_vector(
        &self,
        vector: &[f32],
        limit: usize,
        threshold: Option<f64>,
    ) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        self.calls.hit();
        if vector.len() != self.dimensions {
            return Err(RetrievalError::SearchFailed {
                source_name: "vector".to_string(),
                reason: format!(
                    "query vector has {} dimensions, index has {}",
                    vector.len(),
                    self.dimensions
                ),
            }
            .into());
        }

        let mut hits: Vec<ScoredItem<Chunk>> = self
            .entries
            .iter()
            .filter_map(|(chunk, v)| {
                let similarity = cosine(vector, v.as_ref()?);
                match threshold {
                    Some(t) if similarity < t => None,
                    _ => Some(ScoredItem::new(
                        chunk.clone(),
                        ScoreSource::VectorSimilarity.of(similarity),
                    )),
                }
            })
            .collect();
        sort_descending(&mut hits);
        hits.truncate(limit);
        Ok(hits)
    }
}

/// Term-count keyword search over chunk content.
pub struct InMemoryKeywordIndex {
    chunks: Vec<Chunk>,
    pub calls: CallCounter,
}

impl InMemoryKeywordIndex {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self {
            chunks,
            calls: CallCounter::default(),
        }
    }
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[async_trait]
impl IKeywordRetrieval for InMemoryKeywordIndex {
    async fn search_by_keyword(
        &self,
        query: &str,
        limit: usize,
    ) -> SeekerResult<Vec<ScoredItem<Chunk>>> {
        self.calls.hit();
        let query_words = words(query);
        let mut hits: Vec<ScoredItem<Chunk>> = self
            .chunks
            .iter()
            .filter_map(|chunk| {
                let content = words(&chunk.content);
                let rank = query_words
                    .iter()
                    .map(|q| content.iter().filter(|w| *w == q).count())
                    .sum::<usize>();
                (rank > 0).then(|| {
                    ScoredItem::new(chunk.clone(), ScoreSource::KeywordRank.of(rank as f64))
                })
            })
            .collect();
        sort_descending(&mut hits);
        hits.truncate(limit);
        Ok(hits)
    }
}

/// Trigram search over client records.
///
/// A record's similarity is the greatest over email, first name, last name
/// and description; records at or below the threshold are excluded.
pub struct InMemoryClientIndex {
    clients: Vec<ClientRecord>,
    pub calls: CallCounter,
}

impl InMemoryClientIndex {
    pub fn new(clients: Vec<ClientRecord>) -> Self {
        Self {
            clients,
            calls: CallCounter::default(),
        }
    }

    fn similarity(query: &str, client: &ClientRecord) -> f64 {
        [
            client.email.as_str(),
            client.first_name.as_str(),
            client.last_name.as_str(),
            client.description.as_deref().unwrap_or(""),
        ]
        .iter()
        .map(|field| trigram::similarity(query, field))
        .fold(0.0, f64::max)
    }
}

#[async_trait]
impl IFuzzyRetrieval<ClientRecord> for InMemoryClientIndex {
    async fn search(
        &self,
        query: &str,
        threshold: f64,
        limit: Option<usize>,
    ) -> SeekerResult<Vec<ScoredItem<ClientRecord>>> {
        self.calls.hit();
        let mut hits: Vec<ScoredItem<ClientRecord>> = self
            .clients
            .iter()
            .filter_map(|client| {
                let similarity = Self::similarity(query, client);
                (similarity > threshold).then(|| {
                    ScoredItem::new(client.clone(), ScoreSource::TrigramSimilarity.of(similarity))
                })
            })
            .collect();
        sort_descending(&mut hits);
        if let Some(limit) = limit {
            hits.truncate(limit);
        }
        Ok(hits)
    }
}

/// Document lookup by id; unknown ids are omitted.
pub struct InMemoryDocumentStore {
    documents: HashMap<Uuid, Document>,
    pub calls: CallCounter,
}

impl InMemoryDocumentStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: documents.into_iter().map(|d| (d.id, d)).collect(),
            calls: CallCounter::default(),
        }
    }
}

#[async_trait]
impl IDocumentRepository for InMemoryDocumentStore {
    async fn get_by_ids(&self, ids: &[Uuid]) -> SeekerResult<Vec<Document>> {
        self.calls.hit();
        // Reverse order so callers cannot rely on input order.
        Ok(ids
            .iter()
            .rev()
            .filter_map(|id| self.documents.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(content: &str) -> Chunk {
        Chunk::new(Uuid::new_v4(), 0, content)
    }

    #[tokio::test]
    async fn chunk_index_enforces_threshold_and_skips_unvectored() {
        let mut index = InMemoryChunkIndex::new(2);
        index.insert(chunk("aligned"), Some(vec![1.0, 0.0]));
        index.insert(chunk("diagonal"), Some(vec![1.0, 1.0]));
        index.insert(chunk("orthogonal"), Some(vec![0.0, 1.0]));
        index.insert(chunk("no vector"), None);

        let hits = index.search_by_vector(&[1.0, 0.0], 10, Some(0.5)).await.unwrap();
        let contents: Vec<_> = hits.iter().map(|h| h.item.content.as_str()).collect();
        assert_eq!(contents, vec!["aligned", "diagonal"]);
        assert!((hits[0].value() - 1.0).abs() < 1e-9);

        let all = index.search_by_vector(&[1.0, 0.0], 10, None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(index.calls.get(), 2);
    }

    #[tokio::test]
    async fn chunk_index_rejects_wrong_dimensions() {
        let index = InMemoryChunkIndex::new(3);
        assert!(index.search_by_vector(&[1.0], 5, None).await.is_err());
    }

    #[tokio::test]
    async fn client_index_takes_best_field() {
        let index = InMemoryClientIndex::new(vec![
            ClientRecord::new("Ada", "Lovelace", "ada@example.com", None),
            ClientRecord::new("Grace", "Hopper", "grace@example.com", None),
        ]);
        let hits = index.search("lovelace", 0.32, None).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item.last_name, "Lovelace");
        assert_eq!(hits[0].value(), 1.0);
        assert_eq!(hits[0].source(), ScoreSource::TrigramSimilarity);
    }

    #[tokio::test]
    async fn client_index_threshold_is_exclusive() {
        let index = InMemoryClientIndex::new(vec![ClientRecord::new("Ada", "L", "a@x.io", None)]);
        assert!(index.search("ada", 1.0, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn document_store_omits_unknown_ids() {
        let doc = Document::new(Uuid::new_v4(), "Known");
        let store = InMemoryDocumentStore::new(vec![doc.clone()]);
        let found = store.get_by_ids(&[Uuid::new_v4(), doc.id]).await.unwrap();
        assert_eq!(found, vec![doc]);
    }

    #[tokio::test]
    async fn keyword_index_ranks_by_term_count() {
        let index = InMemoryKeywordIndex::new(vec![
            chunk("tax tax planning"),
            chunk("tax"),
            chunk("golf"),
        ]);
        let hits = index.search_by_keyword("tax planning", 10).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].value(), 3.0);
        assert_eq!(hits[0].source(), ScoreSource::KeywordRank);
    }
}
