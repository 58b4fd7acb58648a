//! Data model for interview feedback: the envelope the model is instructed
//! to return (raw category scores) and the client-facing shape (scores
//! collapsed to one mean per question and one overall).

use serde::{Deserialize, Serialize};

use crate::feedback::scoring::CategoryScoreSet;

/// One question's assessment as the model returns it. All fields default so
/// a sparse reply still deserializes; omitted scores count as 0.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuestionAssessment {
    pub scores: CategoryScoreSet,
    pub best_quote: String,
    pub best_quote_reason: String,
    pub worst_quote: String,
    pub worst_quote_reason: String,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub summary: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OverallAssessment {
    pub scores: CategoryScoreSet,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub summary: String,
}

/// The full envelope the model is instructed to return: one assessment per
/// input question, in order, plus one for the interview as a whole.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelFeedback {
    pub questions: Vec<QuestionAssessment>,
    pub overall: OverallAssessment,
}

/// Client-facing per-question feedback: the six raw categories collapsed to
/// one mean score.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionFeedback {
    pub score: f64,
    pub best_quote: String,
    pub best_quote_reason: String,
    pub worst_quote: String,
    pub worst_quote_reason: String,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub summary: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallFeedback {
    pub score: f64,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub questions: Vec<QuestionFeedback>,
    pub overall: OverallFeedback,
}

impl From<QuestionAssessment> for QuestionFeedback {
    fn from(a: QuestionAssessment) -> Self {
        QuestionFeedback {
            score: a.scores.mean(),
            best_quote: a.best_quote,
            best_quote_reason: a.best_quote_reason,
            worst_quote: a.worst_quote,
            worst_quote_reason: a.worst_quote_reason,
            strengths: a.strengths,
            areas_to_improve: a.areas_to_improve,
            summary: a.summary,
            confidence: a.confidence,
        }
    }
}

impl From<OverallAssessment> for OverallFeedback {
    fn from(a: OverallAssessment) -> Self {
        OverallFeedback {
            score: a.scores.mean(),
            strengths: a.strengths,
            areas_to_improve: a.areas_to_improve,
            summary: a.summary,
        }
    }
}

impl From<ModelFeedback> for FeedbackResponse {
    fn from(f: ModelFeedback) -> Self {
        FeedbackResponse {
            questions: f.questions.into_iter().map(Into::into).collect(),
            overall: f.overall.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_feedback_deserializes_and_collapses_scores() {
        let json = r#"{
            "questions": [{
                "scores": {
                    "response_organization": 80,
                    "technical_knowledge": 80,
                    "problem_solving": 80,
                    "position_application": 80,
                    "timing": 80,
                    "personability": 80
                },
                "best_quote": "I profiled it first",
                "best_quote_reason": "evidence-driven",
                "worst_quote": "it just worked",
                "worst_quote_reason": "no reasoning shown",
                "strengths": ["methodical"],
                "areas_to_improve": ["quantify impact"],
                "summary": "solid answer",
                "confidence": 0.9
            }],
            "overall": {
                "scores": {
                    "response_organization": 70,
                    "technical_knowledge": 70,
                    "problem_solving": 70,
                    "position_application": 70,
                    "timing": 70,
                    "personability": 70
                },
                "strengths": ["consistent"],
                "areas_to_improve": ["pace"],
                "summary": "good interview"
            }
        }"#;

        let parsed: ModelFeedback = serde_json::from_str(json).unwrap();
        let response = FeedbackResponse::from(parsed);
        assert_eq!(response.questions.len(), 1);
        assert_eq!(response.questions[0].score, 80.0);
        assert_eq!(response.questions[0].best_quote, "I profiled it first");
        assert_eq!(response.overall.score, 70.0);
        assert_eq!(response.overall.summary, "good interview");
    }

    #[test]
    fn test_sparse_assessment_defaults_to_zero_scores() {
        let json = r#"{
            "questions": [{"summary": "thin answer"}],
            "overall": {"summary": "short interview"}
        }"#;
        let parsed: ModelFeedback = serde_json::from_str(json).unwrap();
        let response = FeedbackResponse::from(parsed);
        assert_eq!(response.questions[0].score, 0.0);
        assert_eq!(response.overall.score, 0.0);
        assert_eq!(response.questions[0].summary, "thin answer");
    }
}
