/// LLM Client — the single point of entry for all text-model calls.
///
/// ARCHITECTURAL RULE: No handler may call a provider API directly.
/// All model interactions MUST go through a `TextModel` from this module.
///
/// Models are hardcoded per provider (do not make configurable to prevent
/// drift). Every call is bounded by the caller-supplied window; there are
/// no automatic retries — a failure is surfaced once.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

pub mod extract;
pub mod prompts;

const OPENAI_RESPONSES_URL: &str = "https://api.openai.com/v1/responses";
const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// The model used for all OpenAI Responses calls.
pub const OPENAI_MODEL: &str = "gpt-4o";
/// The model used for all Groq chat-completions calls.
pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

const MAX_OUTPUT_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16, body: String },

    #[error("call did not complete within its window")]
    Timeout,

    #[error("no credential configured for {0}")]
    MissingCredential(&'static str),

    #[error("model returned invalid JSON: {detail}")]
    Malformed { detail: String, snippet: String },
}

/// One completion request. `schema`, when set, constrains the model to a
/// strict JSON-schema structured output (honored by `OpenAiModel`; the chat
/// endpoints never receive one).
#[derive(Debug)]
pub struct CompletionRequest {
    pub system: &'static str,
    pub prompt: String,
    pub timeout: Duration,
    pub schema: Option<Value>,
}

/// A text-generation provider. Carried in `AppState` as `Arc<dyn TextModel>`
/// so tests can stub the upstream without touching handler code.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Returns the raw text of the model's reply. Implementations bound the
    /// call with `CompletionRequest::timeout` and classify failures.
    async fn complete(&self, req: CompletionRequest) -> Result<String, LlmError>;
}

/// Races `fut` against a fixed window. The elapsed branch drops the future,
/// which cancels the in-flight request.
pub(crate) async fn with_deadline<F>(window: Duration, fut: F) -> Result<F::Output, LlmError>
where
    F: std::future::Future,
{
    tokio::time::timeout(window, fut)
        .await
        .map_err(|_| LlmError::Timeout)
}

/// Issues one bounded POST with a bearer credential and classifies the
/// outcome: elapsed window → `Timeout`, non-2xx → `Api` (body kept for the
/// log only), otherwise the parsed JSON body.
async fn post_bounded(
    client: &Client,
    url: &str,
    bearer: &str,
    body: &Value,
    window: Duration,
) -> Result<Value, LlmError> {
    let request = client.post(url).bearer_auth(bearer).json(body).send();

    let response = match with_deadline(window, request).await {
        Ok(result) => result?,
        Err(e) => {
            warn!("call to {url} exceeded its {}s window", window.as_secs());
            return Err(e);
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("provider returned {status}: {body}");
        return Err(LlmError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let raw = response.json::<Value>().await?;
    debug!("provider call to {url} succeeded");
    Ok(raw)
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAiModel — Responses API
// ────────────────────────────────────────────────────────────────────────────

/// OpenAI Responses API provider. Supports strict JSON-schema structured
/// output via `CompletionRequest::schema`.
#[derive(Clone)]
pub struct OpenAiModel {
    client: Client,
    api_key: Option<String>,
}

impl OpenAiModel {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    fn request_body(req: &CompletionRequest) -> Value {
        let mut body = json!({
            "model": OPENAI_MODEL,
            "instructions": req.system,
            "input": req.prompt,
            "max_output_tokens": MAX_OUTPUT_TOKENS,
        });
        if let Some(schema) = &req.schema {
            body["text"] = json!({
                "format": {
                    "type": "json_schema",
                    "name": "structured_output",
                    "strict": true,
                    "schema": schema,
                }
            });
        }
        body
    }
}

#[async_trait]
impl TextModel for OpenAiModel {
    async fn complete(&self, req: CompletionRequest) -> Result<String, LlmError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential("openai"))?;

        let body = Self::request_body(&req);
        let raw = post_bounded(&self.client, OPENAI_RESPONSES_URL, key, &body, req.timeout).await?;
        Ok(extract::reply_text(&raw))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GroqModel — chat completions API
// ────────────────────────────────────────────────────────────────────────────

/// Groq chat-completions provider.
#[derive(Clone)]
pub struct GroqModel {
    client: Client,
    api_key: Option<String>,
}

impl GroqModel {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    fn request_body(req: &CompletionRequest) -> Value {
        json!({
            "model": GROQ_MODEL,
            "messages": [
                { "role": "system", "content": req.system },
                { "role": "user", "content": req.prompt },
            ],
            "max_tokens": MAX_OUTPUT_TOKENS,
        })
    }
}

#[async_trait]
impl TextModel for GroqModel {
    async fn complete(&self, req: CompletionRequest) -> Result<String, LlmError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential("groq"))?;

        let body = Self::request_body(&req);
        let raw = post_bounded(&self.client, GROQ_CHAT_URL, key, &body, req.timeout).await?;
        Ok(extract::reply_text(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_request() -> CompletionRequest {
        CompletionRequest {
            system: "system prompt",
            prompt: "user prompt".to_string(),
            timeout: Duration::from_secs(10),
            schema: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_deadline_elapses_for_stalled_call() {
        let result = with_deadline(Duration::from_secs(10), std::future::pending::<()>()).await;
        assert!(matches!(result, Err(LlmError::Timeout)));
    }

    #[tokio::test]
    async fn test_with_deadline_passes_through_completed_call() {
        let result = with_deadline(Duration::from_secs(10), async { 7u32 }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_openai_body_without_schema_has_no_text_format() {
        let body = OpenAiModel::request_body(&plain_request());
        assert_eq!(body["model"], OPENAI_MODEL);
        assert_eq!(body["instructions"], "system prompt");
        assert_eq!(body["input"], "user prompt");
        assert!(body.get("text").is_none());
    }

    #[test]
    fn test_openai_body_attaches_strict_schema() {
        let mut req = plain_request();
        req.schema = Some(json!({"type": "object"}));
        let body = OpenAiModel::request_body(&req);
        assert_eq!(body["text"]["format"]["type"], "json_schema");
        assert_eq!(body["text"]["format"]["strict"], true);
        assert_eq!(body["text"]["format"]["schema"]["type"], "object");
    }

    #[test]
    fn test_groq_body_orders_system_before_user() {
        let body = GroqModel::request_body(&plain_request());
        assert_eq!(body["model"], GROQ_MODEL);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "system prompt");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "user prompt");
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_any_call() {
        let model = OpenAiModel::new(None);
        let result = model.complete(plain_request()).await;
        assert!(matches!(result, Err(LlmError::MissingCredential("openai"))));

        let model = GroqModel::new(None);
        let result = model.complete(plain_request()).await;
        assert!(matches!(result, Err(LlmError::MissingCredential("groq"))));
    }
}
