use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Provider credentials are optional at startup: a handler that needs a
/// missing credential fails with a configuration error before any outbound
/// call is attempted, so endpoints for the other providers keep working.
/// Credential values are never logged.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub deepgram_api_key: Option<String>,
    pub deepgram_project_id: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            groq_api_key: optional_env("GROQ_API_KEY"),
            deepgram_api_key: optional_env("DEEPGRAM_API_KEY"),
            deepgram_project_id: optional_env("DEEPGRAM_PROJECT_ID"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an environment variable, treating unset and blank as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
