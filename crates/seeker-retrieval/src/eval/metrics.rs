//! Standard IR metrics over a ranked id list and a relevant id set.
//!
//! Gains are binary. nDCG uses a `log2(rank + 1)` discount.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Cutoff used by [`EvaluationMetrics::evaluate`].
pub const DEFAULT_CUTOFF: usize = 5;

/// 1 / rank of the first relevant id, or 0 if none is retrieved.
pub fn reciprocal_rank<T: Eq + Hash>(ranked: &[T], relevant: &HashSet<T>) -> f64 {
    ranked
        .iter()
        .position(|id| relevant.contains(id))
        .map_or(0.0, |i| 1.0 / (i + 1) as f64)
}

/// Share of relevant ids found in the top `k`. 0 when nothing is relevant.
pub fn recall_at_k<T: Eq + Hash>(ranked: &[T], relevant: &HashSet<T>, k: usize) -> f64 {
    if relevant.is_empty() {
        return 0.0;
    }
    let hits = ranked.iter().take(k).filter(|id| relevant.contains(*id)).count();
    hits as f64 / relevant.len() as f64
}

/// Share of retrieved ids that are relevant. 0 for an empty ranking.
pub fn precision<T: Eq + Hash>(ranked: &[T], relevant: &HashSet<T>) -> f64 {
    if ranked.is_empty() {
        return 0.0;
    }
    let hits = ranked.iter().filter(|id| relevant.contains(*id)).count();
    hits as f64 / ranked.len() as f64
}

/// Share of the top `k` that is relevant. Divides by `k`, not by the number retrieved.
pub fn precision_at_k<T: Eq + Hash>(ranked: &[T], relevant: &HashSet<T>, k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let hits = ranked.iter().take(k).filter(|id| relevant.contains(*id)).count();
    hits as f64 / k as f64
}

pub fn ndcg_at_k<T: Eq + Hash>(ranked: &[T], relevant: &HashSet<T>, k: usize) -> f64 {
    let discount = |i: usize| 1.0 / ((i + 2) as f64).log2();
    let dcg: f64 = ranked
        .iter()
        .take(k)
        .enumerate()
        .filter(|(_, id)| relevant.contains(*id))
        .map(|(i, _)| discount(i))
        .sum();
    let ideal: f64 = (0..relevant.len().min(k)).map(discount).sum();
    if ideal == 0.0 {
        0.0
    } else {
        dcg / ideal
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationMetrics {
    pub mrr: f64,
    pub recall_at_k: f64,
    pub ndcg_at_k: f64,
    pub precision: f64,
    pub k: usize,
}

impl EvaluationMetrics {
    /// Metrics for one query at cutoff [`DEFAULT_CUTOFF`].
    pub fn evaluate<T: Eq + Hash>(ranked: &[T], relevant: &HashSet<T>) -> Self {
        Self::evaluate_at(ranked, relevant, DEFAULT_CUTOFF)
    }

    pub fn evaluate_at<T: Eq + Hash>(ranked: &[T], relevant: &HashSet<T>, k: usize) -> Self {
        Self {
            mrr: reciprocal_rank(ranked, relevant),
            recall_at_k: recall_at_k(ranked, relevant, k),
            ndcg_at_k: ndcg_at_k(ranked, relevant, k),
            precision: precision(ranked, relevant),
            k,
        }
    }

    /// Arithmetic mean over queries; `None` for no queries.
    pub fn mean(all: &[EvaluationMetrics]) -> Option<Self> {
        let first = all.first()?;
        let n = all.len() as f64;
        let avg = |f: fn(&EvaluationMetrics) -> f64| all.iter().map(f).sum::<f64>() / n;
        Some(Self {
            mrr: avg(|m| m.mrr),
            recall_at_k: avg(|m| m.recall_at_k),
            ndcg_at_k: avg(|m| m.ndcg_at_k),
            precision: avg(|m| m.precision),
            k: first.k,
        })
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MRR: {:.4}, Recall@{k}: {:.4}, NDCG@{k}: {:.4}, Precision: {:.4}",
            self.mrr,
            self.recall_at_k,
            self.ndcg_at_k,
            self.precision,
            k = self.k
        )
    }
}

/// Mean metrics over `(ranked, relevant)` pairs at cutoff `k`.
pub fn evaluate_run<T: Eq + Hash>(runs: &[(Vec<T>, HashSet<T>)], k: usize) -> Option<EvaluationMetrics> {
    let per_query: Vec<EvaluationMetrics> = runs
        .iter()
        .map(|(ranked, relevant)| EvaluationMetrics::evaluate_at(ranked, relevant, k))
        .collect();
    EvaluationMetrics::mean(&per_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u32]) -> HashSet<u32> {
        ids.iter().copied().collect()
    }

    #[test]
    fn reciprocal_rank_uses_first_hit() {
        assert_eq!(reciprocal_rank(&[9, 3, 1], &set(&[1, 3])), 0.5);
        assert_eq!(reciprocal_rank(&[9, 8], &set(&[1])), 0.0);
    }

    #[test]
    fn recall_counts_only_top_k() {
        let ranked = [1, 2, 3, 4, 5, 6];
        assert_eq!(recall_at_k(&ranked, &set(&[1, 6]), 5), 0.5);
        assert_eq!(recall_at_k(&ranked, &set(&[]), 5), 0.0);
    }

    #[test]
    fn precision_over_retrieved() {
        assert_eq!(precision(&[1, 2, 3, 4], &set(&[2, 4])), 0.5);
        assert_eq!(precision::<u32>(&[], &set(&[1])), 0.0);
    }

    #[test]
    fn precision_at_k_divides_by_cutoff() {
        assert_eq!(precision_at_k(&[1, 2], &set(&[1]), 4), 0.25);
        assert_eq!(precision_at_k(&[1, 2], &set(&[1]), 0), 0.0);
    }

    #[test]
    fn ndcg_is_one_for_ideal_ranking() {
        assert!((ndcg_at_k(&[1, 2, 9], &set(&[1, 2]), 5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ndcg_discounts_late_hits() {
        // Single relevant item at rank 2: (1/log2(3)) / 1.
        let expected = 1.0 / 3f64.log2();
        assert!((ndcg_at_k(&[9, 1], &set(&[1]), 5) - expected).abs() < 1e-12);
    }

    #[test]
    fn mean_averages_each_field() {
        let a = EvaluationMetrics::evaluate(&[1], &set(&[1]));
        let b = EvaluationMetrics::evaluate(&[2], &set(&[1]));
        let mean = EvaluationMetrics::mean(&[a, b]).unwrap();
        assert_eq!(mean.mrr, 0.5);
        assert_eq!(mean.precision, 0.5);
        assert_eq!(mean.k, DEFAULT_CUTOFF);
        assert!(EvaluationMetrics::mean(&[]).is_none());
    }

    #[test]
    fn evaluate_run_and_display() {
        let runs = vec![(vec![1, 2], set(&[1])), (vec![3, 1], set(&[1]))];
        let m = evaluate_run(&runs, 5).unwrap();
        assert_eq!(m.mrr, 0.75);
        assert!(m.to_string().starts_with("MRR: 0.7500, Recall@5: 1.0000"));
    }
}
