use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextModel;
use crate::speech::KeyIssuer;

/// Shared application state injected into all route handlers via Axum
/// extractors. Holds no mutable state — handlers are independent and nothing
/// persists between requests.
#[derive(Clone)]
pub struct AppState {
    /// Responses-API provider: question generation, voice recap, structured
    /// resume feedback.
    pub openai: Arc<dyn TextModel>,
    /// Chat-completions provider: feedback, pause verdicts, fact checks.
    pub groq: Arc<dyn TextModel>,
    /// Short-lived transcription key issuer.
    pub key_issuer: Arc<dyn KeyIssuer>,
    pub config: Config,
}
