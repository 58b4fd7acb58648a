//! Axum route handler for the speech credential proxy.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SpeechKeyResponse {
    pub key: String,
}

/// POST /api/v1/speech/key
///
/// Returns a short-lived transcription key. If issuance fails, falls back to
/// the long-lived primary credential so the client can still transcribe.
/// TODO: revisit the fallback before exposing this service publicly — the
/// primary key never expires.
pub async fn handle_speech_key(
    State(state): State<AppState>,
) -> Result<Json<SpeechKeyResponse>, AppError> {
    match state.key_issuer.issue_key().await {
        Ok(key) => Ok(Json(SpeechKeyResponse { key })),
        Err(LlmError::MissingCredential(provider)) => Err(AppError::Config(format!(
            "no credential configured for {provider}"
        ))),
        Err(e) => {
            warn!("short-lived key issuance failed, falling back to primary key: {e}");
            let key = state
                .config
                .deepgram_api_key
                .clone()
                .ok_or_else(|| AppError::Config("no credential configured for deepgram".to_string()))?;
            Ok(Json(SpeechKeyResponse { key }))
        }
    }
}
