//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Combines ranked lists by position alone, so lists scored on different
//! scales (cosine, keyword rank, logits) fuse without normalization.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use seeker_core::config::RrfConfig;
use seeker_core::models::scored::sort_descending;
use seeker_core::{Score, ScoreSource, ScoredItem};

/// Fuses ranked lists of the same item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReciprocalRankFusion {
    k: u32,
}

impl ReciprocalRankFusion {
    pub fn new(k: u32) -> Self {
        Self { k }
    }

    pub fn from_config(config: &RrfConfig) -> Self {
        Self::new(config.k)
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    /// Contribution of an item at 1-based `rank`.
    pub fn contribution(&self, rank: usize) -> f64 {
        1.0 / (f64::from(self.k) + rank as f64)
    }

    /// Fuse `lists`, identifying items by `key`.
    ///
    /// The first occurrence of a key is its canonical payload. Its history
    /// becomes: its own history and score, then each later occurrence's
    /// history and score, in list order. The fused `Rrf` score is the current
    /// score. Ties keep first-key-seen order.
    pub fn fuse<T, K, F>(&self, lists: &[Vec<ScoredItem<T>>], key: F) -> Vec<ScoredItem<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut slots: Vec<(T, Vec<Score>, f64)> = Vec::new();
        let mut index: HashMap<K, usize> = HashMap::new();

        for list in lists {
            for (position, scored) in list.iter().enumerate() {
                let contribution = self.contribution(position + 1);
                match index.entry(key(&scored.item)) {
                    Entry::Occupied(e) => {
                        let (_, history, total) = &mut slots[*e.get()];
                        history.extend_from_slice(&scored.history);
                        history.push(scored.score);
                        *total += contribution;
                    }
                    Entry::Vacant(e) => {
                        e.insert(slots.len());
                        let mut history = scored.history.clone();
                        history.push(scored.score);
                        slots.push((scored.item.clone(), history, contribution));
                    }
                }
            }
        }

        let mut fused: Vec<ScoredItem<T>> = slots
            .into_iter()
            .map(|(item, history, total)| ScoredItem {
                item,
                score: ScoreSource::Rrf.of(total),
                history,
            })
            .collect();
        sort_descending(&mut fused);
        fused
    }

    /// [`fuse`](Self::fuse), keeping the top `limit` items.
    pub fn fuse_with_limit<T, K, F>(
        &self,
        lists: &[Vec<ScoredItem<T>>],
        key: F,
        limit: usize,
    ) -> Vec<ScoredItem<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut fused = self.fuse(lists, key);
        fused.truncate(limit);
        fused
    }
}

impl Default for ReciprocalRankFusion {
    fn default() -> Self {
        Self::from_config(&RrfConfig::default())
    }
}
