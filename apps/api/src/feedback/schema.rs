//! Strict JSON-schema builder constraining structured feedback output.
//! Every object is closed (`additionalProperties: false`) and every property
//! required; the `questions` array is pinned to the input question count.

use serde_json::{json, Value};

fn scores_schema() -> Value {
    let category = json!({ "type": "number", "minimum": 0, "maximum": 100 });
    json!({
        "type": "object",
        "properties": {
            "response_organization": category,
            "technical_knowledge": category,
            "problem_solving": category,
            "position_application": category,
            "timing": category,
            "personability": category,
        },
        "required": [
            "response_organization",
            "technical_knowledge",
            "problem_solving",
            "position_application",
            "timing",
            "personability"
        ],
        "additionalProperties": false
    })
}

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

/// Builds the strict schema for a feedback reply over `question_count`
/// questions.
pub fn feedback_schema(question_count: usize) -> Value {
    let question = json!({
        "type": "object",
        "properties": {
            "scores": scores_schema(),
            "best_quote": { "type": "string" },
            "best_quote_reason": { "type": "string" },
            "worst_quote": { "type": "string" },
            "worst_quote_reason": { "type": "string" },
            "strengths": string_array(),
            "areas_to_improve": string_array(),
            "summary": { "type": "string" },
            "confidence": { "type": "number", "minimum": 0, "maximum": 1 },
        },
        "required": [
            "scores",
            "best_quote",
            "best_quote_reason",
            "worst_quote",
            "worst_quote_reason",
            "strengths",
            "areas_to_improve",
            "summary",
            "confidence"
        ],
        "additionalProperties": false
    });

    let overall = json!({
        "type": "object",
        "properties": {
            "scores": scores_schema(),
            "strengths": string_array(),
            "areas_to_improve": string_array(),
            "summary": { "type": "string" },
        },
        "required": ["scores", "strengths", "areas_to_improve", "summary"],
        "additionalProperties": false
    });

    json!({
        "type": "object",
        "properties": {
            "questions": {
                "type": "array",
                "minItems": question_count,
                "maxItems": question_count,
                "items": question,
            },
            "overall": overall,
        },
        "required": ["questions", "overall"],
        "additionalProperties": false
    })
}
