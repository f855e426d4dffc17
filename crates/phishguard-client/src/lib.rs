//! HTTP implementation of the scoring seam.
//!
//! `ScoringApiClient` talks to the remote PhishGuard analysis endpoint.
//! Configuration priority: explicit base URL > PHISHGUARD_API_URL > default.

use async_trait::async_trait;
use phishguard_core::error::{PhishGuardError, Result};
use phishguard_core::scoring::ScoringService;
use phishguard_types::{InputType, ScoreResponse};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote scoring service.
#[derive(Clone)]
pub struct ScoringApiClient {
    client: Client,
    base_url: String,
}

impl ScoringApiClient {
    /// Creates a client against the given API base URL (without the
    /// `/analyze` suffix).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(DEFAULT_TIMEOUT),
            base_url: base_url.into(),
        }
    }

    /// Creates a client from the PHISHGUARD_API_URL environment variable,
    /// falling back to `http://localhost:5000/api`.
    pub fn from_env() -> Self {
        let base_url = env::var("PHISHGUARD_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }

    /// Overrides the request timeout after construction.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ScoringService for ScoringApiClient {
    async fn analyze(&self, input_type: InputType, input: &str) -> Result<ScoreResponse> {
        let body = AnalyzeRequest {
            r#type: input_type,
            input,
        };

        let response = self
            .client
            .post(self.analyze_url())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                PhishGuardError::transport(format!("Scoring request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_error_response(status, &body_text));
        }

        response.json::<ScoreResponse>().await.map_err(|err| {
            PhishGuardError::transport(format!("Failed to parse scoring response: {err}"))
        })
    }
}

fn build_client(timeout: Duration) -> Client {
    match Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(err) => {
            tracing::warn!("Failed to build HTTP client, falling back to defaults: {err}");
            Client::new()
        }
    }
}

/// Wire body of an analyze request: `{"type": "url"|"email", "input": ...}`.
#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    r#type: InputType,
    input: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn map_error_response(status: reqwest::StatusCode, body: &str) -> PhishGuardError {
    // Non-2xx responses carry {"error": "..."} when the service produced
    // the failure itself; otherwise fall back to the status line.
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => PhishGuardError::transport(parsed.error),
        Err(_) => PhishGuardError::transport(format!("Scoring service returned {status}")),
    }
}
