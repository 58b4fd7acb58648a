// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments and builders.

use serde_json::{json, Value};

/// System prompt fragment that enforces JSON-only output. Endpoints without
/// a task-specific persona use it as their full system prompt.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Serializes question/answer pairs into the transcript block embedded in
/// prompts. Index is the question's position in the interview.
pub fn transcript_json(questions: &[String], answers: &[String]) -> String {
    let pairs: Vec<Value> = questions
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(index, (question, answer))| {
            json!({
                "index": index,
                "question": question,
                "answer": answer,
            })
        })
        .collect();
    serde_json::to_string_pretty(&pairs).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_transcript_json_pairs_in_order() {
        let questions = vec!["Q one".to_string(), "Q two".to_string()];
        let answers = vec!["A one".to_string(), "A two".to_string()];
        let parsed: Value = serde_json::from_str(&transcript_json(&questions, &answers)).unwrap();
        assert_eq!(parsed[0]["index"], 0);
        assert_eq!(parsed[0]["question"], "Q one");
        assert_eq!(parsed[0]["answer"], "A one");
        assert_eq!(parsed[1]["index"], 1);
        assert_eq!(parsed[1]["question"], "Q two");
    }
}
