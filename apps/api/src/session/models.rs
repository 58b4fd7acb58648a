//! Data model for the live-session endpoints.

use serde::{Deserialize, Serialize};

/// Pause-analysis verdict: has the candidate finished answering?
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    DefinitelyDone,
    DefinitelyStillTalking,
    /// The undecided default: prompt the candidate rather than guess.
    #[default]
    Ask,
}

impl Verdict {
    /// Maps the model's raw reply to a verdict. Anything other than the two
    /// definite tokens — including noise around them — collapses to `Ask`.
    pub fn from_model_text(text: &str) -> Verdict {
        match text.trim().trim_matches('"') {
            "definitely_done" => Verdict::DefinitelyDone,
            "definitely_still_talking" => Verdict::DefinitelyStillTalking,
            _ => Verdict::Ask,
        }
    }
}

/// Fact-check result, returned to the client as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheck {
    pub is_correct: bool,
    pub result: String,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_recognizes_definite_tokens() {
        assert_eq!(
            Verdict::from_model_text("definitely_done"),
            Verdict::DefinitelyDone
        );
        assert_eq!(
            Verdict::from_model_text("  definitely_still_talking\n"),
            Verdict::DefinitelyStillTalking
        );
        assert_eq!(
            Verdict::from_model_text("\"definitely_done\""),
            Verdict::DefinitelyDone
        );
    }

    #[test]
    fn test_verdict_defaults_unrecognized_to_ask() {
        assert_eq!(Verdict::from_model_text("ask"), Verdict::Ask);
        assert_eq!(Verdict::from_model_text("probably done?"), Verdict::Ask);
        assert_eq!(Verdict::from_model_text(""), Verdict::Ask);
        assert_eq!(Verdict::from_model_text("DONE"), Verdict::Ask);
    }

    #[test]
    fn test_verdict_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Verdict::DefinitelyStillTalking).unwrap(),
            "\"definitely_still_talking\""
        );
        assert_eq!(serde_json::to_string(&Verdict::Ask).unwrap(), "\"ask\"");
    }

    #[test]
    fn test_fact_check_round_trips() {
        let json = r#"{"is_correct": false, "result": "Incorrect", "explanation": "TCP is connection-oriented."}"#;
        let check: FactCheck = serde_json::from_str(json).unwrap();
        assert!(!check.is_correct);
        assert_eq!(check.result, "Incorrect");
    }
}
