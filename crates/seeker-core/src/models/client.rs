use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client record searched by fuzzy lexical match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ClientRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            description,
            created_at: Utc::now(),
        }
    }

    /// Text handed to the cross-encoder: name, email, then description.
    pub fn rerank_text(&self) -> String {
        let mut text = format!("{} {} {}", self.first_name, self.last_name, self.email);
        if let Some(description) = self.description.as_deref().filter(|d| !d.trim().is_empty()) {
            text.push(' ');
            text.push_str(description);
        }
        text
    }
}
