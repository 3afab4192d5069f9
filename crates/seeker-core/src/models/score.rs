use serde::{Deserialize, Serialize};

/// Where a relevance score came from.
///
/// Each source has its own range:
/// - `VectorSimilarity`: cosine similarity, [-1, 1]
/// - `KeywordRank`: full-text rank, [0, unbounded)
/// - `TrigramSimilarity`: character trigram similarity, [0, 1]
/// - `CrossEncoder`: relevance logits, unbounded (0 is the decision boundary)
/// - `Rrf`: reciprocal rank fusion, small positive values
///
/// The source is provenance only; comparisons always use the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    VectorSimilarity,
    KeywordRank,
    TrigramSimilarity,
    CrossEncoder,
    Rrf,
}

impl ScoreSource {
    /// Build a score of this source.
    pub fn of(self, value: f64) -> Score {
        Score::new(value, self)
    }
}

/// A relevance value tagged with its source. Higher is more relevant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub value: f64,
    pub source: ScoreSource,
}

impl Score {
    pub fn new(value: f64, source: ScoreSource) -> Self {
        Self { value, source }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} ({:?})", self.value, self.source)
    }
}
