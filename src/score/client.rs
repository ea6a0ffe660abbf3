//! Scoring service client.
//!
//! Thin pass-through: POSTs the ScoreRequest as JSON and interprets the
//! reply. The scoring algorithm itself lives entirely in the remote service.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::time::Duration;

use super::{ScoreError, request::ScoreRequest};
use crate::config::AppConfig;

/// Wire shape of a scoring reply. Both fields are optional: a reply missing
/// either carries no result to display.
#[derive(Debug, Deserialize)]
pub struct ScoreResponse {
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the UI should show for one scoring call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// A score plus its human-readable line items.
    Scored { score: i64, items: Vec<String> },
    /// The service answered but had nothing to display. Never fabricate a
    /// score for this.
    NoResult,
}

impl From<ScoreResponse> for ScoreOutcome {
    fn from(response: ScoreResponse) -> Self {
        match (response.score, response.message) {
            (Some(score), Some(message)) => ScoreOutcome::Scored {
                score,
                items: split_items(&message),
            },
            _ => ScoreOutcome::NoResult,
        }
    }
}

/// Splits the pipe-delimited scoring message into display line items,
/// trimming whitespace and dropping empty segments.
pub fn split_items(message: &str) -> Vec<String> {
    message
        .split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct ScoreClient {
    client: Client,
    url: String,
}

impl ScoreClient {
    pub fn from_config(config: &AppConfig) -> Result<Self, ScoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ScoreError::Unavailable(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self {
            client,
            url: config.scorer_url.clone(),
        })
    }

    /// Scores one hand. Blocking, no retry; the caller resubmits if it wants
    /// another attempt.
    pub fn score_hand(&self, request: &ScoreRequest) -> Result<ScoreOutcome, ScoreError> {
        crate::log(&format!(
            "Scoring hand {:?} with starter {}",
            request.hand, request.starter
        ));

        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .map_err(|e| ScoreError::Unavailable(format!("scoring request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ScoreError::Unavailable(format!("failed to read scoring reply: {}", e)))?;

        if !status.is_success() {
            return Err(ScoreError::Unavailable(format!(
                "scoring service returned HTTP {}",
                status
            )));
        }

        let parsed: ScoreResponse =
            serde_json::from_str(&body).map_err(|_| ScoreError::InvalidBody { raw: body })?;

        Ok(ScoreOutcome::from(parsed))
    }
}
