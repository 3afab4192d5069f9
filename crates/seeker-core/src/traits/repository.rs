use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::SeekerResult;
use crate::models::Document;

/// Batch document lookup.
#[async_trait]
pub trait IDocumentRepository: Send + Sync {
    /// Documents for the ids that resolve, in any order. Unknown ids are omitted.
    async fn get_by_ids(&self, ids: &[Uuid]) -> SeekerResult<Vec<Document>>;
}
