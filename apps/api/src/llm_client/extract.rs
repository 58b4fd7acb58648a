//! Response normalization for provider replies.
//!
//! The two reply envelopes this service understands are modeled explicitly.
//! Fallback order when pulling the model's text out of a raw body:
//! 1. Responses `output_text` pass-through
//! 2. Responses nested `output[0].content[0].text`
//! 3. Chat `choices[0].message.content`
//! An unrecognized body yields the empty string rather than an error; the
//! JSON parse downstream reports it.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::llm_client::LlmError;

/// How much of an unparseable reply is kept for the operator log.
const SNIPPET_CHARS: usize = 300;

#[derive(Debug, Default, Deserialize)]
pub struct ResponsesReply {
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// The known provider reply shapes.
#[derive(Debug)]
pub enum ProviderReply {
    Responses(ResponsesReply),
    Chat(ChatReply),
}

impl ProviderReply {
    /// Classifies a raw body. A `choices` array marks the chat shape;
    /// anything else is treated as a Responses envelope (whose fields are
    /// all optional, so classification itself cannot fail).
    pub fn classify(raw: &Value) -> ProviderReply {
        if raw.get("choices").is_some() {
            if let Ok(chat) = serde_json::from_value::<ChatReply>(raw.clone()) {
                return ProviderReply::Chat(chat);
            }
        }
        let responses = serde_json::from_value::<ResponsesReply>(raw.clone()).unwrap_or_default();
        ProviderReply::Responses(responses)
    }

    /// Extracts the model's text, empty string if the shape carries none.
    pub fn text(&self) -> String {
        match self {
            ProviderReply::Responses(r) => r
                .output_text
                .clone()
                .or_else(|| {
                    r.output
                        .first()
                        .and_then(|item| item.content.first())
                        .and_then(|part| part.text.clone())
                })
                .unwrap_or_default(),
            ProviderReply::Chat(c) => c
                .choices
                .first()
                .and_then(|choice| choice.message.content.clone())
                .unwrap_or_default(),
        }
    }
}

/// Classify-then-extract convenience used by the provider impls.
pub fn reply_text(raw: &Value) -> String {
    ProviderReply::classify(raw).text()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// First 300 chars of `text`, char-boundary safe. Diagnostics only — never
/// returned to the caller.
pub fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}

/// Fence-strips and parses model text as JSON. Failure keeps the head of the
/// raw text for the operator log.
pub fn parse_llm_json<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let cleaned = strip_json_fences(text);
    serde_json::from_str(cleaned).map_err(|e| LlmError::Malformed {
        detail: e.to_string(),
        snippet: snippet(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reply_text_prefers_output_text_passthrough() {
        let raw = json!({
            "output_text": "direct",
            "output": [{"content": [{"text": "nested"}]}]
        });
        assert_eq!(reply_text(&raw), "direct");
    }

    #[test]
    fn test_reply_text_falls_back_to_nested_content() {
        let raw = json!({
            "output": [{"content": [{"type": "output_text", "text": "nested"}]}]
        });
        assert_eq!(reply_text(&raw), "nested");
    }

    #[test]
    fn test_reply_text_reads_chat_choices() {
        let raw = json!({
            "choices": [{"message": {"role": "assistant", "content": "from chat"}}]
        });
        assert_eq!(reply_text(&raw), "from chat");
    }

    #[test]
    fn test_reply_text_unknown_shape_is_empty() {
        assert_eq!(reply_text(&json!({"something": "else"})), "");
        assert_eq!(reply_text(&json!([1, 2, 3])), "");
        assert_eq!(reply_text(&json!({"choices": []})), "");
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_llm_json_round_trip_through_fences() {
        let value: Value = parse_llm_json("```json\n{\"a\":1}\n```").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_parse_llm_json_failure_keeps_snippet() {
        let long = "not json ".repeat(100);
        let err = parse_llm_json::<Value>(&long).unwrap_err();
        match err {
            LlmError::Malformed { snippet, .. } => {
                assert_eq!(snippet.chars().count(), 300);
                assert!(long.starts_with(&snippet));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_snippet_respects_char_boundaries() {
        let text = "é".repeat(400);
        assert_eq!(snippet(&text).chars().count(), 300);
    }
}
