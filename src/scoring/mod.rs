//! Score aggregation
//!
//! # Formula
//!
//! ```text
//! overall = Σ score(c) / |categories|      for every category c returned
//! ```
//!
//! The category set is whatever the evaluator returned; extra or missing
//! categories still average. Each score must be a whole number in 0..=10.
//! Out-of-range values are rejected, never clamped.
//!
//! The commentary line is cosmetic: a random pick from a pool keyed by the
//! rounded overall score.

mod commentary;

pub use commentary::{comment_pool, pick_comment};

use crate::ai::{CategoryScore, RawEvaluation};
use crate::error::{GradeError, GradeResult};
use indexmap::IndexMap;
use rand::Rng;
use serde::Serialize;

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 10;

/// A validated evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    /// Exactly as returned by the evaluator
    pub categories: IndexMap<String, CategoryScore>,
    pub overall_score: f64,
    pub advice: String,
}

/// A record plus its display commentary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub record: ScoreRecord,
    pub comment: String,
}

/// Validate a category score as an integer in `MIN_SCORE..=MAX_SCORE`.
pub fn validate_score(category: &str, score: &serde_json::Number) -> GradeResult<u8> {
    let whole = match (score.as_u64(), score.as_f64()) {
        (Some(v), _) => Some(v),
        (None, Some(f)) if f.fract() == 0.0 && f >= 0.0 => Some(f as u64),
        _ => None,
    };

    whole
        .filter(|v| *v <= u64::from(MAX_SCORE))
        .map(|v| v as u8)
        .ok_or_else(|| GradeError::InvalidScore {
            category: category.to_string(),
            value: score.to_string(),
        })
}

/// Validate every category and compute the unweighted mean.
pub fn aggregate(raw: RawEvaluation) -> GradeResult<ScoreRecord> {
    if raw.scores.is_empty() {
        return Err(GradeError::MalformedEvaluation(
            "evaluation contains no categories".to_string(),
        ));
    }

    let mut total: u32 = 0;
    for (category, entry) in &raw.scores {
        total += u32::from(validate_score(category, &entry.score)?);
    }
    let overall_score = f64::from(total) / raw.scores.len() as f64;

    Ok(ScoreRecord {
        categories: raw.scores,
        overall_score,
        advice: raw.advice,
    })
}

/// Rounded overall score clamped to the commentary range.
pub fn comment_bucket(overall: f64) -> u8 {
    overall.round().clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8
}

/// Aggregate and attach a commentary line drawn from `rng`.
pub fn score_card<R: Rng + ?Sized>(raw: RawEvaluation, rng: &mut R) -> GradeResult<ScoreCard> {
    let record = aggregate(raw)?;
    let comment = pick_comment(comment_bucket(record.overall_score), rng).to_string();
    Ok(ScoreCard { record, comment })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::parse_evaluation;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn raw(scores: &[(&str, serde_json::Value)]) -> RawEvaluation {
        let map: serde_json::Map<String, serde_json::Value> = scores
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!({"score": v, "reason": "r"})))
            .collect();
        serde_json::from_value(serde_json::json!({"scores": map, "advice": "a"})).unwrap()
    }

    #[test]
    fn test_mean_of_six() {
        let record = aggregate(raw(&[
            ("code_quality", 3.into()),
            ("documentation", 10.into()),
            ("configuration", 8.into()),
            ("commit_hygiene", 6.into()),
            ("size_hygiene", 0.into()),
            ("test_coverage", 10.into()),
        ]))
        .unwrap();
        assert!((record.overall_score - 37.0 / 6.0).abs() < 1e-9);
        assert_eq!(record.categories.len(), 6);
        assert_eq!(record.advice, "a");
    }

    #[test]
    fn test_category_set_is_not_fixed() {
        let record = aggregate(raw(&[("only", 4.into()), ("extra", 8.into())])).unwrap();
        assert_eq!(record.overall_score, 6.0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        for bad in [serde_json::json!(11), serde_json::json!(-1), serde_json::json!(7.5)] {
            let err = aggregate(raw(&[("a", 5.into()), ("b", bad.clone())])).unwrap_err();
            match err {
                GradeError::InvalidScore { category, .. } => assert_eq!(category, "b"),
                other => panic!("unexpected {other:?} for {bad}"),
            }
        }
    }

    #[test]
    fn test_whole_floats_accepted() {
        let record = aggregate(raw(&[("a", serde_json::json!(7.0))])).unwrap();
        assert_eq!(record.overall_score, 7.0);
        // Passed through untouched
        assert_eq!(record.categories["a"].score.to_string(), "7.0");
    }

    #[test]
    fn test_empty_categories_are_malformed() {
        let parsed = parse_evaluation(r#"{"scores": {}, "advice": ""}"#).unwrap();
        assert!(matches!(aggregate(parsed), Err(GradeError::MalformedEvaluation(_))));
    }

    #[test]
    fn test_overall_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..200 {
            let n = rng.random_range(1..=8);
            let scores: Vec<(String, serde_json::Value)> = (0..n)
                .map(|i| (format!("c{i}"), rng.random_range(0..=10u8).into()))
                .collect();
            let refs: Vec<(&str, serde_json::Value)> =
                scores.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
            let overall = aggregate(raw(&refs)).unwrap().overall_score;
            assert!((0.0..=10.0).contains(&overall));
        }
    }

    #[test]
    fn test_comment_bucket() {
        assert_eq!(comment_bucket(37.0 / 6.0), 6);
        assert_eq!(comment_bucket(9.5), 10);
        assert_eq!(comment_bucket(0.4), 0);
        assert_eq!(comment_bucket(42.0), 10);
        assert_eq!(comment_bucket(-3.0), 0);
    }

    #[test]
    fn test_score_card_comment_from_bucket() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let card = score_card(raw(&[("a", 10.into()), ("b", 10.into())]), &mut rng).unwrap();
        assert!(comment_pool(10).contains(&card.comment.as_str()));
    }
}
