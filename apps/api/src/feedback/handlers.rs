//! Axum route handlers for the Feedback API.

use std::time::Duration;

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::{require_parallel, require_text, AppError};
use crate::feedback::models::{FeedbackResponse, ModelFeedback};
use crate::feedback::prompts::{
    FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM, RESUME_FEEDBACK_PROMPT_TEMPLATE,
    RESUME_FEEDBACK_SYSTEM,
};
use crate::feedback::schema::feedback_schema;
use crate::llm_client::extract::{parse_llm_json, snippet};
use crate::llm_client::prompts::transcript_json;
use crate::llm_client::CompletionRequest;
use crate::state::AppState;

const FEEDBACK_TIMEOUT: Duration = Duration::from_secs(25);

/// Fallback role wording when the client omits one.
const DEFAULT_ROLE: &str = "the position";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub questions: Option<Vec<String>>,
    pub answers: Option<Vec<String>>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFeedbackRequest {
    pub questions: Option<Vec<String>>,
    pub answers: Option<Vec<String>>,
    pub role: Option<String>,
    pub resume: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/feedback
///
/// Scores the full transcript. The reply's `questions` array must stay
/// parallel to the input; a count mismatch is an upstream fault, never
/// silently truncated or padded.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let (questions, answers) = require_parallel(req.questions.as_deref(), req.answers.as_deref())?;
    let role = req.role.as_deref().map(str::trim).unwrap_or(DEFAULT_ROLE);

    let prompt = FEEDBACK_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{question_count}", &questions.len().to_string())
        .replace("{transcript_json}", &transcript_json(questions, answers));

    debug!("scoring feedback over {} answers", questions.len());

    let text = state
        .groq
        .complete(CompletionRequest {
            system: FEEDBACK_SYSTEM,
            prompt,
            timeout: FEEDBACK_TIMEOUT,
            schema: None,
        })
        .await?;

    let assessed: ModelFeedback = parse_llm_json(&text)?;
    check_question_count(&assessed, questions.len(), &text)?;

    Ok(Json(assessed.into()))
}

/// POST /api/v1/feedback/resume
///
/// Resume-aware variant: the candidate's resume is woven into the prompt and
/// the reply shape is pinned by a strict JSON schema. The count check stays
/// as a defensive invariant even though the schema already enforces it.
pub async fn handle_resume_feedback(
    State(state): State<AppState>,
    Json(req): Json<ResumeFeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let (questions, answers) = require_parallel(req.questions.as_deref(), req.answers.as_deref())?;
    let resume = require_text(req.resume.as_deref(), "resume")?;
    let role = req.role.as_deref().map(str::trim).unwrap_or(DEFAULT_ROLE);

    let prompt = RESUME_FEEDBACK_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{question_count}", &questions.len().to_string())
        .replace("{resume}", resume)
        .replace("{transcript_json}", &transcript_json(questions, answers));

    debug!(
        "scoring resume-aware feedback over {} answers",
        questions.len()
    );

    let text = state
        .openai
        .complete(CompletionRequest {
            system: RESUME_FEEDBACK_SYSTEM,
            prompt,
            timeout: FEEDBACK_TIMEOUT,
            schema: Some(feedback_schema(questions.len())),
        })
        .await?;

    let assessed: ModelFeedback = parse_llm_json(&text)?;
    check_question_count(&assessed, questions.len(), &text)?;

    Ok(Json(assessed.into()))
}

fn check_question_count(
    assessed: &ModelFeedback,
    expected: usize,
    raw: &str,
) -> Result<(), AppError> {
    if assessed.questions.len() != expected {
        return Err(AppError::MalformedUpstream {
            detail: format!(
                "model returned {} question entries, expected {expected}",
                assessed.questions.len()
            ),
            snippet: snippet(raw),
        });
    }
    Ok(())
}
