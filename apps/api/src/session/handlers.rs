//! Axum route handlers for the live-session endpoints: next question,
//! pause verdicts, fact checks, and the voice recap.

use std::time::Duration;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_parallel, require_text, AppError};
use crate::llm_client::extract::parse_llm_json;
use crate::llm_client::prompts::{transcript_json, JSON_ONLY_SYSTEM};
use crate::llm_client::CompletionRequest;
use crate::session::models::{FactCheck, Verdict};
use crate::session::prompts::{
    FACT_CHECK_PROMPT_TEMPLATE, PAUSE_PROMPT_TEMPLATE, PAUSE_SYSTEM, QUESTION_PROMPT_TEMPLATE,
    QUESTION_SYSTEM, VOICE_SUMMARY_PROMPT_TEMPLATE, VOICE_SUMMARY_SYSTEM,
};
use crate::state::AppState;

const QUESTION_TIMEOUT: Duration = Duration::from_secs(15);
const PAUSE_TIMEOUT: Duration = Duration::from_secs(10);
const FACT_CHECK_TIMEOUT: Duration = Duration::from_secs(15);
const VOICE_SUMMARY_TIMEOUT: Duration = Duration::from_secs(15);

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionRequest {
    pub role: Option<String>,
    #[serde(default)]
    pub previous_questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NextQuestionResponse {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct PauseRequest {
    pub transcript: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PauseResponse {
    pub verdict: Verdict,
}

#[derive(Debug, Deserialize)]
pub struct FactCheckRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSummaryRequest {
    pub questions: Option<Vec<String>>,
    pub answers: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct VoiceSummaryResponse {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/questions/next
///
/// Generates the next interview question for the role, steering the model
/// away from questions already asked.
pub async fn handle_next_question(
    State(state): State<AppState>,
    Json(req): Json<NextQuestionRequest>,
) -> Result<Json<NextQuestionResponse>, AppError> {
    let role = require_text(req.role.as_deref(), "role")?;

    let previous = if req.previous_questions.is_empty() {
        "(none yet)".to_string()
    } else {
        req.previous_questions
            .iter()
            .map(|q| format!("- {q}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let prompt = QUESTION_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{previous_questions}", &previous);

    debug!(
        "generating next question for role '{role}' ({} already asked)",
        req.previous_questions.len()
    );

    let text = state
        .openai
        .complete(CompletionRequest {
            system: QUESTION_SYSTEM,
            prompt,
            timeout: QUESTION_TIMEOUT,
            schema: None,
        })
        .await?;

    Ok(Json(NextQuestionResponse {
        question: text.trim().to_string(),
    }))
}

/// POST /api/v1/pause
///
/// Decides whether the candidate has finished answering. Any reply other
/// than the two definite tokens collapses to `ask`.
pub async fn handle_pause(
    State(state): State<AppState>,
    Json(req): Json<PauseRequest>,
) -> Result<Json<PauseResponse>, AppError> {
    let transcript = require_text(req.transcript.as_deref(), "transcript")?;

    let prompt = PAUSE_PROMPT_TEMPLATE.replace("{transcript}", transcript);

    debug!("analyzing pause over {} transcript chars", transcript.len());

    let text = state
        .groq
        .complete(CompletionRequest {
            system: PAUSE_SYSTEM,
            prompt,
            timeout: PAUSE_TIMEOUT,
            schema: None,
        })
        .await?;

    Ok(Json(PauseResponse {
        verdict: Verdict::from_model_text(&text),
    }))
}

/// POST /api/v1/fact-check
///
/// Checks the technical substance of one answer.
pub async fn handle_fact_check(
    State(state): State<AppState>,
    Json(req): Json<FactCheckRequest>,
) -> Result<Json<FactCheck>, AppError> {
    let question = require_text(req.question.as_deref(), "question")?;
    let answer = require_text(req.answer.as_deref(), "answer")?;

    let prompt = FACT_CHECK_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{answer}", answer);

    debug!("fact-checking one answer");

    let text = state
        .groq
        .complete(CompletionRequest {
            system: JSON_ONLY_SYSTEM,
            prompt,
            timeout: FACT_CHECK_TIMEOUT,
            schema: None,
        })
        .await?;

    let check: FactCheck = parse_llm_json(&text)?;
    Ok(Json(check))
}

/// POST /api/v1/voice-summary
///
/// Produces a short spoken-style recap of the interview.
pub async fn handle_voice_summary(
    State(state): State<AppState>,
    Json(req): Json<VoiceSummaryRequest>,
) -> Result<Json<VoiceSummaryResponse>, AppError> {
    let (questions, answers) = require_parallel(req.questions.as_deref(), req.answers.as_deref())?;

    let prompt = VOICE_SUMMARY_PROMPT_TEMPLATE
        .replace("{transcript_json}", &transcript_json(questions, answers));

    debug!("building voice recap over {} answers", questions.len());

    let text = state
        .openai
        .complete(CompletionRequest {
            system: VOICE_SUMMARY_SYSTEM,
            prompt,
            timeout: VOICE_SUMMARY_TIMEOUT,
            schema: None,
        })
        .await?;

    Ok(Json(VoiceSummaryResponse {
        text: text.trim().to_string(),
    }))
}
