//! Query-term overlap cross-encoder.
//!
//! Scores a pair by the fraction of distinct query terms present in the
//! text, mapped onto a logit-like scale: no overlap is `-MAX_LOGIT`, full
//! overlap is `MAX_LOGIT`. Texts containing the whole query as a phrase get
//! `PHRASE_BONUS` on top.

use std::collections::HashSet;

use seeker_core::errors::SeekerResult;
use seeker_core::traits::ICrossEncoder;

use super::terms;

const MAX_LOGIT: f64 = 4.0;
const PHRASE_BONUS: f64 = 1.0;

#[derive(Debug, Default)]
pub struct TermOverlapScorer;

impl TermOverlapScorer {
    pub fn new() -> Self {
        Self
    }

    fn score_one(query_terms: &HashSet<String>, phrase: &str, text: &str) -> f64 {
        if query_terms.is_empty() {
            return -MAX_LOGIT;
        }
        let text_terms: HashSet<String> = terms(text).into_iter().collect();
        let overlap = query_terms.intersection(&text_terms).count() as f64;
        let coverage = overlap / query_terms.len() as f64;
        let mut logit = MAX_LOGIT * (2.0 * coverage - 1.0);
        if query_terms.len() > 1 && terms(text).join(" ").contains(phrase) {
            logit += PHRASE_BONUS;
        }
        logit
    }
}

impl ICrossEncoder for TermOverlapScorer {
    fn score_pairs(&self, query: &str, texts: &[String]) -> SeekerResult<Vec<f64>> {
        let query_tokens = terms(query);
        let phrase = query_tokens.join(" ");
        let query_terms: HashSet<String> = query_tokens.into_iter().collect();
        Ok(texts
            .iter()
            .map(|t| Self::score_one(&query_terms, &phrase, t))
            .collect())
    }

    fn name(&self) -> &str {
        "term-overlap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_overlap_beats_partial_beats_none() {
        let scorer = TermOverlapScorer::new();
        let texts = vec![
            "notes on estate tax".to_string(),
            "tax planning for 2025".to_string(),
            "golf club membership".to_string(),
        ];
        let scores = scorer.score_pairs("tax planning", &texts).unwrap();
        assert_eq!(scores.len(), 3);
        assert!(scores[1] > scores[0]);
        assert!(scores[0] > scores[2]);
        assert_eq!(scores[2], -MAX_LOGIT);
    }

    #[test]
    fn phrase_match_adds_bonus() {
        let scorer = TermOverlapScorer::new();
        let texts = vec![
            "Tax planning review".to_string(),
            "planning the tax year".to_string(),
        ];
        let scores = scorer.score_pairs("tax planning", &texts).unwrap();
        assert_eq!(scores[0], MAX_LOGIT + PHRASE_BONUS);
        assert_eq!(scores[1], MAX_LOGIT);
    }

    #[test]
    fn empty_batch_scores_nothing() {
        let scorer = TermOverlapScorer::new();
        assert!(scorer.score_pairs("anything", &[]).unwrap().is_empty());
    }
}
