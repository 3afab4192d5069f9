use serde::{Deserialize, Serialize};

use super::{ClientRecord, Document};

/// Entity type of a unified result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultKind {
    Document,
    Record,
}

/// Payload of a unified result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnifiedEntity {
    Document(Document),
    Record(ClientRecord),
}

impl UnifiedEntity {
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Document(_) => ResultKind::Document,
            Self::Record(_) => ResultKind::Record,
        }
    }

    pub fn id(&self) -> uuid::Uuid {
        match self {
            Self::Document(d) => d.id,
            Self::Record(r) => r.id,
        }
    }
}

/// One entry of the merged, ranked result list.
///
/// `rank` is 1-based and equals the entry's position in the final list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedResult {
    pub kind: ResultKind,
    pub entity: UnifiedEntity,
    pub score: f64,
    pub rank: usize,
}
