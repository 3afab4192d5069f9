//! JSON corpus loader.
//!
//! Fixture files live in `crates/test-fixtures/corpus/`. Chunk ids are fresh
//! per load; client and document ids are fixed in the file.

use std::path::PathBuf;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use seeker_core::models::DocumentStatus;
use seeker_core::{Chunk, ClientRecord, Document};
use uuid::Uuid;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("corpus")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

#[derive(Debug, Deserialize)]
struct ClientFixture {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentFixture {
    id: Uuid,
    client_id: Uuid,
    title: String,
    chunks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusQuery {
    pub query: String,
    #[serde(default)]
    pub relevant_documents: Vec<Uuid>,
    #[serde(default)]
    pub relevant_clients: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
struct CorpusFile {
    clients: Vec<ClientFixture>,
    documents: Vec<DocumentFixture>,
    #[serde(default)]
    queries: Vec<CorpusQuery>,
}

/// A loaded corpus with domain types ready for the in-memory collaborators.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub clients: Vec<ClientRecord>,
    pub documents: Vec<Document>,
    pub chunks: Vec<Chunk>,
    pub queries: Vec<CorpusQuery>,
}

impl Corpus {
    pub fn document(&self, id: Uuid) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn chunks_of(&self, document_id: Uuid) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(move |c| c.parent_id == document_id)
    }
}

/// Load `corpus/<name>.json`.
pub fn load_corpus(name: &str) -> Corpus {
    let file: CorpusFile = load_fixture(&format!("{name}.json"));
    let now = Utc::now();

    let clients = file
        .clients
        .into_iter()
        .map(|c| ClientRecord {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            description: c.description,
            created_at: now,
        })
        .collect();

    let mut documents = Vec::with_capacity(file.documents.len());
    let mut chunks = Vec::new();
    for d in file.documents {
        for (index, content) in d.chunks.iter().enumerate() {
            chunks.push(Chunk::new(d.id, index as u32, content.as_str()));
        }
        documents.push(Document {
            id: d.id,
            client_id: d.client_id,
            title: d.title,
            status: DocumentStatus::Processed,
            summary: None,
            created_at: now,
        });
    }

    Corpus {
        clients,
        documents,
        chunks,
        queries: file.queries,
    }
}
