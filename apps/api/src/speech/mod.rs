//! Short-lived Deepgram key issuance for browser transcription.
//!
//! The browser never sees the primary Deepgram credential in the happy path:
//! it gets a scoped key that expires after a few minutes.

pub mod handlers;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::llm_client::{with_deadline, LlmError};

const DEEPGRAM_PROJECTS_URL: &str = "https://api.deepgram.com/v1/projects";
const KEY_TTL_SECONDS: u32 = 600;
const KEY_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues short-lived transcription keys. Carried in `AppState` as
/// `Arc<dyn KeyIssuer>` so tests can stub the vendor.
#[async_trait]
pub trait KeyIssuer: Send + Sync {
    async fn issue_key(&self) -> Result<String, LlmError>;
}

/// Real issuer backed by the Deepgram project-keys API.
#[derive(Clone)]
pub struct DeepgramKeyIssuer {
    client: Client,
    api_key: Option<String>,
    project_id: Option<String>,
}

impl DeepgramKeyIssuer {
    pub fn new(api_key: Option<String>, project_id: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            project_id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct KeyGrant {
    key: String,
}

#[async_trait]
impl KeyIssuer for DeepgramKeyIssuer {
    async fn issue_key(&self) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential("deepgram"))?;
        let project_id = self
            .project_id
            .as_deref()
            .ok_or(LlmError::MissingCredential("deepgram project"))?;

        let url = format!("{DEEPGRAM_PROJECTS_URL}/{project_id}/keys");
        let body = json!({
            "comment": "short-lived browser transcription key",
            "scopes": ["usage:write"],
            "time_to_live_in_seconds": KEY_TTL_SECONDS,
        });

        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {api_key}"))
            .json(&body)
            .send();

        let response = with_deadline(KEY_TIMEOUT, request).await??;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("deepgram key grant returned {status}: {body}");
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let grant: KeyGrant = response.json().await?;
        debug!("issued short-lived transcription key (ttl {KEY_TTL_SECONDS}s)");
        Ok(grant.key)
    }
}
