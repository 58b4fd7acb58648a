pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::session::handlers as session;
use crate::speech::handlers as speech;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Feedback API
        .route("/api/v1/feedback", post(feedback::handle_feedback))
        .route(
            "/api/v1/feedback/resume",
            post(feedback::handle_resume_feedback),
        )
        // Live-session API
        .route("/api/v1/questions/next", post(session::handle_next_question))
        .route("/api/v1/pause", post(session::handle_pause))
        .route("/api/v1/fact-check", post(session::handle_fact_check))
        .route("/api/v1/voice-summary", post(session::handle_voice_summary))
        // Speech credential proxy
        .route("/api/v1/speech/key", post(speech::handle_speech_key))
        .with_state(state)
}
