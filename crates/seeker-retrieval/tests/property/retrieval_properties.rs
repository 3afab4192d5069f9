use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use proptest::prelude::*;
use seeker_core::{Chunk, ScoreSource, ScoredItem};
use seeker_retrieval::search::best_chunk_per_parent;
use seeker_retrieval::{ReciprocalRankFusion, Reranker};
use test_fixtures::ScriptedRelevanceModel;
use uuid::Uuid;

fn ranked(ids: &[u32], source: ScoreSource) -> Vec<ScoredItem<u32>> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| ScoredItem::new(*id, source.of(100.0 - i as f64)))
        .collect()
}

fn distinct(ids: Vec<u32>) -> Vec<u32> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

proptest! {
    #[test]
    fn single_list_fusion_keeps_order(ids in prop::collection::vec(0u32..1000, 0..50), k in 0u32..100) {
        let ids = distinct(ids);
        let rrf = ReciprocalRankFusion::new(k);
        let fused = rrf.fuse(&[ranked(&ids, ScoreSource::VectorSimilarity)], |n| *n);

        prop_assert_eq!(fused.iter().map(|f| f.item).collect::<Vec<_>>(), ids);
        for (i, item) in fused.iter().enumerate() {
            let expected = 1.0 / (f64::from(k) + (i + 1) as f64);
            prop_assert!((item.value() - expected).abs() < 1e-12);
            prop_assert_eq!(item.source(), ScoreSource::Rrf);
        }
    }

    #[test]
    fn disjoint_lists_keep_every_item(a in prop::collection::vec(0u32..500, 0..30), b in prop::collection::vec(500u32..1000, 0..30)) {
        let (a, b) = (distinct(a), distinct(b));
        let fused = ReciprocalRankFusion::default().fuse(
            &[ranked(&a, ScoreSource::VectorSimilarity), ranked(&b, ScoreSource::KeywordRank)],
            |n| *n,
        );
        prop_assert_eq!(fused.len(), a.len() + b.len());
        prop_assert!(fused.windows(2).all(|w| w[0].value() >= w[1].value()));
    }

    #[test]
    fn rerank_rescores_every_item_once(scores in prop::collection::vec(-10i32..10, 1..20)) {
        let mut model = ScriptedRelevanceModel::new(0.0);
        for (i, s) in scores.iter().enumerate() {
            model = model.with_score(i.to_string(), f64::from(*s));
        }
        let items: Vec<ScoredItem<usize>> = (0..scores.len())
            .map(|i| ScoredItem::new(i, ScoreSource::TrigramSimilarity.of(0.5)))
            .collect();
        let reranker = Reranker::new(Arc::new(model));

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let reranked = runtime
            .block_on(reranker.rerank("q", &items, &|i: &usize| i.to_string(), None))
            .unwrap();

        prop_assert_eq!(reranked.len(), items.len());
        let seen: HashSet<usize> = reranked.iter().map(|r| r.item).collect();
        prop_assert_eq!(seen.len(), items.len());
        for r in &reranked {
            prop_assert_eq!(r.history.len(), 1);
            prop_assert_eq!(r.source(), ScoreSource::CrossEncoder);
            prop_assert_eq!(r.value(), f64::from(scores[r.item]));
        }
        prop_assert!(reranked.windows(2).all(|w| w[0].value() >= w[1].value()));
    }

    #[test]
    fn per_parent_aggregation_keeps_the_max(assignments in prop::collection::vec((0usize..5, -100i32..100), 0..40)) {
        let parents: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let results: Vec<ScoredItem<Chunk>> = assignments
            .iter()
            .enumerate()
            .map(|(i, (p, v))| {
                ScoredItem::new(
                    Chunk::new(parents[*p], i as u32, "c"),
                    ScoreSource::VectorSimilarity.of(f64::from(*v)),
                )
            })
            .collect();

        let mut expected: HashMap<Uuid, f64> = HashMap::new();
        for r in &results {
            let best = expected.entry(r.item.parent_id).or_insert(f64::MIN);
            *best = best.max(r.value());
        }

        let best = best_chunk_per_parent(results);
        prop_assert_eq!(best.len(), expected.len());
        for r in &best {
            prop_assert_eq!(r.value(), expected[&r.item.parent_id]);
        }
    }
}
