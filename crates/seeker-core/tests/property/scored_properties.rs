use proptest::prelude::*;
use seeker_core::models::scored::{filter_by_threshold, sort_descending};
use seeker_core::models::{ScoreSource, ScoredItem};

fn items(values: &[f64]) -> Vec<ScoredItem<usize>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ScoredItem::new(i, ScoreSource::VectorSimilarity.of(*v)))
        .collect()
}

proptest! {
    #[test]
    fn sort_is_descending_and_stable(values in prop::collection::vec(-3i32..3, 0..40)) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let mut sorted = items(&values);
        sort_descending(&mut sorted);

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].value() >= pair[1].value());
            if pair[0].value() == pair[1].value() {
                // Equal scores keep input order.
                prop_assert!(pair[0].item < pair[1].item);
            }
        }
        prop_assert_eq!(sorted.len(), values.len());
    }

    #[test]
    fn assign_score_grows_history_by_one(steps in 1usize..8) {
        let mut item = ScoredItem::new((), ScoreSource::TrigramSimilarity.of(0.5));
        for step in 0..steps {
            let before = item.history.clone();
            let previous = item.score;
            item = item.assign_score(ScoreSource::CrossEncoder.of(step as f64));
            prop_assert_eq!(item.history.len(), before.len() + 1);
            prop_assert_eq!(&item.history[..before.len()], &before[..]);
            prop_assert_eq!(*item.history.last().unwrap(), previous);
        }
    }

    #[test]
    fn threshold_filter_keeps_only_values_at_or_above(
        values in prop::collection::vec(-5.0f64..5.0, 0..30),
        threshold in -5.0f64..5.0,
    ) {
        let kept = filter_by_threshold(items(&values), threshold);
        prop_assert!(kept.iter().all(|i| i.value() >= threshold));
        let expected = values.iter().filter(|v| **v >= threshold).count();
        prop_assert_eq!(kept.len(), expected);
    }
}
