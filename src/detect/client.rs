//! Vision model client.
//!
//! Calls an OpenAI-compatible chat completions endpoint with one image and a
//! fixed instruction, asking for a JSON list of rank+suit codes. The API key
//! comes from the OPENAI_API_KEY environment variable.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use super::DetectError;
use crate::config::AppConfig;

/// Fixed instruction describing the expected output shape. This is a
/// constant, never computed from the image.
const SYSTEM_PROMPT: &str = "You analyse playing cards and return a list of \
cards present in any image.\nReturn a response in JSON, using this style:\n\
[\n\"AC\", \"5H\", \"KD\", \"10H\", \"4S\"\n]";

const USER_QUESTION: &str = "What cards are in this image?";

/// Client for one card-identification call per submitted image.
pub struct DetectorClient {
    client: Client,
    api_key: String,
    url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl DetectorClient {
    /// Builds a client from the app config and the OPENAI_API_KEY
    /// environment variable.
    pub fn from_config(config: &AppConfig) -> Result<Self, DetectError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            DetectError::Unavailable("OPENAI_API_KEY not set in the environment".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DetectError::Unavailable(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            url: config.openai_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Sends the image (base64 JPEG bytes) to the model and returns the raw
    /// assistant message content.
    ///
    /// Transport and HTTP failures map to [`DetectError::Unavailable`]; a
    /// 2xx reply whose envelope cannot be read maps to
    /// [`DetectError::InvalidResponse`] with the body kept for display.
    pub fn identify_cards(&self, image_b64: &str) -> Result<String, DetectError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: vec![MessageContent::Text {
                        text: SYSTEM_PROMPT.to_string(),
                    }],
                },
                ChatMessage {
                    role: "user",
                    content: vec![
                        MessageContent::Text {
                            text: USER_QUESTION.to_string(),
                        },
                        MessageContent::ImageUrl {
                            image_url: ImageUrl {
                                url: format!("data:image/jpeg;base64,{}", image_b64),
                            },
                        },
                    ],
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: response_format(),
        };

        let response = self
            .client
            .post(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .map_err(|e| DetectError::Unavailable(format!("model request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| DetectError::Unavailable(format!("failed to read model reply: {}", e)))?;

        if !status.is_success() {
            return Err(DetectError::Unavailable(format!(
                "model endpoint returned HTTP {}: {}",
                status,
                api_error_message(&body)
            )));
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|_| DetectError::InvalidResponse { raw: body })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| DetectError::InvalidResponse {
                raw: "model returned no message content".to_string(),
            })
    }
}

/// Response format constraint so the model emits the HandOfCards shape
/// directly instead of prose.
fn response_format() -> serde_json::Value {
    serde_json::json!({
        "type": "json_schema",
        "json_schema": {
            "name": "hand_of_cards",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "cards": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "initials": { "type": "string" },
                                "description": { "type": "string" }
                            },
                            "required": ["initials", "description"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["cards"],
                "additionalProperties": false
            }
        }
    })
}

/// Pulls the human message out of an OpenAI error body, falling back to the
/// raw body when it is not the documented shape.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    response_format: serde_json::Value,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: Vec<MessageContent>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum MessageContent {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
