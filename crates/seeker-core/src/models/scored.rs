//! `ScoredItem<T>`: an item, its current score, and every score it held before.

use serde::{Deserialize, Serialize};

use super::score::{Score, ScoreSource};

/// An item with a relevance score and its score history.
///
/// `history` holds previous scores oldest first; `score` is always the most
/// recent. Re-scoring goes through [`ScoredItem::assign_score`], which moves
/// the current score to the end of the history and never touches past entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem<T> {
    pub item: T,
    pub score: Score,
    pub history: Vec<Score>,
}

impl<T> ScoredItem<T> {
    /// A freshly retrieved item with an empty history.
    pub fn new(item: T, score: Score) -> Self {
        Self {
            item,
            score,
            history: Vec::new(),
        }
    }

    /// Replace the score, appending the previous one to the history.
    pub fn assign_score(mut self, score: Score) -> Self {
        let previous = std::mem::replace(&mut self.score, score);
        self.history.push(previous);
        self
    }

    /// Swap the payload, keeping score and history.
    pub fn map_item<U>(self, f: impl FnOnce(T) -> U) -> ScoredItem<U> {
        ScoredItem {
            item: f(self.item),
            score: self.score,
            history: self.history,
        }
    }

    /// Current score value.
    pub fn value(&self) -> f64 {
        self.score.value
    }

    /// Current score source.
    pub fn source(&self) -> ScoreSource {
        self.score.source
    }
}

/// Stable sort by `score.value`, highest first. Equal values keep input order.
pub fn sort_descending<T>(items: &mut [ScoredItem<T>]) {
    items.sort_by(|a, b| b.score.value.total_cmp(&a.score.value));
}

/// Keep items whose current value is at least `threshold`.
pub fn filter_by_threshold<T>(items: Vec<ScoredItem<T>>, threshold: f64) -> Vec<ScoredItem<T>> {
    items
        .into_iter()
        .filter(|item| item.score.value >= threshold)
        .collect()
}
