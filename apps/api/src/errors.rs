use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// User-visible messages are generic. Upstream bodies, parse diagnostics,
/// and credential details go to the operator log only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("Upstream API call timed out")]
    UpstreamTimeout,

    #[error("Upstream returned invalid JSON: {detail}")]
    MalformedUpstream { detail: String, snippet: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Timeout => AppError::UpstreamTimeout,
            LlmError::MissingCredential(provider) => {
                AppError::Config(format!("no credential configured for {provider}"))
            }
            LlmError::Api { status, body } => {
                AppError::Upstream(format!("status {status}: {body}"))
            }
            LlmError::Http(e) => AppError::Upstream(format!("transport failure: {e}")),
            LlmError::Malformed { detail, snippet } => {
                AppError::MalformedUpstream { detail, snippet }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Config(detail) => {
                tracing::error!("Configuration error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "The server is not configured for this provider".to_string(),
                )
            }
            AppError::Upstream(detail) => {
                tracing::error!("Upstream error: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Upstream API error".to_string(),
                )
            }
            AppError::UpstreamTimeout => {
                tracing::warn!("Upstream call exceeded its window");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "UPSTREAM_TIMEOUT",
                    "Upstream API call timed out".to_string(),
                )
            }
            AppError::MalformedUpstream { detail, snippet } => {
                tracing::error!("Unparseable upstream output ({detail}): {snippet}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_MALFORMED",
                    "AI returned invalid JSON".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared request validation helpers
// ────────────────────────────────────────────────────────────────────────────

/// Returns the trimmed value or a `Validation` error naming the field.
pub fn require_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!(
            "'{field}' is required and must be a non-empty string"
        ))),
    }
}

/// Validates the parallel questions/answers arrays carried by transcript
/// endpoints: both present, both non-empty, same length.
pub fn require_parallel<'a>(
    questions: Option<&'a [String]>,
    answers: Option<&'a [String]>,
) -> Result<(&'a [String], &'a [String]), AppError> {
    let questions = match questions {
        Some(q) if !q.is_empty() => q,
        _ => {
            return Err(AppError::Validation(
                "'questions' is required and must be a non-empty array".to_string(),
            ))
        }
    };
    let answers = match answers {
        Some(a) if !a.is_empty() => a,
        _ => {
            return Err(AppError::Validation(
                "'answers' is required and must be a non-empty array".to_string(),
            ))
        }
    };
    if questions.len() != answers.len() {
        return Err(AppError::Validation(format!(
            "'questions' and 'answers' must have the same length ({} vs {})",
            questions.len(),
            answers.len()
        )));
    }
    Ok((questions, answers))
}
