use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contiguous span of a parent document's text; the unit of vector retrieval.
///
/// `index` orders chunks within their document and says nothing about relevance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: Uuid,
    /// Id of the owning [`Document`](super::Document).
    pub parent_id: Uuid,
    pub index: u32,
    pub content: String,
}

impl Chunk {
    pub fn new(parent_id: Uuid, index: u32, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            parent_id,
            index,
            content: content.into(),
        }
    }
}
