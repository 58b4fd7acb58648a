//! The six-category scoring rubric and its averaging.

use serde::{Deserialize, Serialize};

pub const CATEGORY_COUNT: usize = 6;

/// Fixed rubric scored 0-100 per category, for one answer or for the whole
/// interview. A category the model omits deserializes to 0 and still counts
/// in the denominator — it is not excluded from the mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryScoreSet {
    pub response_organization: f64,
    pub technical_knowledge: f64,
    pub problem_solving: f64,
    pub position_application: f64,
    pub timing: f64,
    pub personability: f64,
}

impl CategoryScoreSet {
    fn values(&self) -> [f64; CATEGORY_COUNT] {
        [
            self.response_organization,
            self.technical_knowledge,
            self.problem_solving,
            self.position_application,
            self.timing,
            self.personability,
        ]
    }

    /// Arithmetic mean of the six categories, rounded to one fractional
    /// digit. No weighting.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.values().iter().sum();
        round_tenth(sum / CATEGORY_COUNT as f64)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: f64) -> CategoryScoreSet {
        CategoryScoreSet {
            response_organization: score,
            technical_knowledge: score,
            problem_solving: score,
            position_application: score,
            timing: score,
            personability: score,
        }
    }

    #[test]
    fn test_mean_all_hundred_is_hundred() {
        assert_eq!(uniform(100.0).mean(), 100.0);
    }

    #[test]
    fn test_mean_all_zero_is_zero() {
        assert_eq!(uniform(0.0).mean(), 0.0);
    }

    #[test]
    fn test_mean_rounds_to_one_fractional_digit() {
        let scores = CategoryScoreSet {
            response_organization: 1.0,
            technical_knowledge: 1.0,
            problem_solving: 1.0,
            position_application: 1.0,
            timing: 1.0,
            personability: 2.0,
        };
        // 7 / 6 = 1.1666... → 1.2
        assert_eq!(scores.mean(), 1.2);
    }

    #[test]
    fn test_missing_category_counts_as_zero_not_excluded() {
        let scores: CategoryScoreSet =
            serde_json::from_str(r#"{"technical_knowledge": 60}"#).unwrap();
        // 60 / 6, not 60 / 1
        assert_eq!(scores.mean(), 10.0);
    }

    #[test]
    fn test_mean_is_key_order_independent() {
        let forward: CategoryScoreSet = serde_json::from_str(
            r#"{"response_organization": 90, "technical_knowledge": 80, "problem_solving": 85,
                "position_application": 70, "timing": 95, "personability": 75}"#,
        )
        .unwrap();
        let permuted: CategoryScoreSet = serde_json::from_str(
            r#"{"personability": 75, "timing": 95, "position_application": 70,
                "problem_solving": 85, "technical_knowledge": 80, "response_organization": 90}"#,
        )
        .unwrap();
        assert_eq!(forward, permuted);
        assert_eq!(forward.mean(), 82.5);
        assert_eq!(permuted.mean(), 82.5);
    }

    #[test]
    fn test_mean_is_idempotent() {
        let scores = uniform(73.0);
        assert_eq!(scores.mean(), scores.mean());
    }
}
