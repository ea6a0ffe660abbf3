//! Application configuration.
//!
//! Loads settings from config.json at startup. Provides the scoring service
//! URL, vision model parameters, and image upload sizing.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Global configuration instance, initialized once at startup.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Complete application configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scoring service endpoint (expects the ScoreRequest JSON body)
    #[serde(default = "default_scorer_url")]
    pub scorer_url: String,
    /// OpenAI-compatible chat completions endpoint
    #[serde(default = "default_openai_url")]
    pub openai_url: String,
    /// Vision model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Width images are downscaled to before upload (controls request size)
    #[serde(default = "default_upload_width")]
    pub upload_width: u32,
    /// Sampling temperature for the vision model. Non-zero, so repeated
    /// detections of the same image may differ.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Token budget for the model response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Timeout for both outbound HTTP calls (seconds)
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_scorer_url() -> String {
    "https://cribbage.azurewebsites.net/score_hand_show".to_string()
}

fn default_openai_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_upload_width() -> u32 {
    500
}

fn default_temperature() -> f32 {
    1.0
}

fn default_max_tokens() -> u32 {
    10383
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scorer_url: default_scorer_url(),
            openai_url: default_openai_url(),
            model: default_model(),
            upload_width: default_upload_width(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

/// Loads configuration from config.json or returns defaults.
/// Looks for config.json in the same directory as the executable.
fn load_config() -> AppConfig {
    let config_path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("config.json")))
        .unwrap_or_else(|| Path::new("config.json").to_path_buf());

    crate::log(&format!("Looking for config at: {}", config_path.display()));

    if config_path.exists() {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    crate::log("Config loaded from config.json");
                    return config;
                }
                Err(e) => {
                    crate::log(&format!(
                        "Failed to parse config.json: {}. Using defaults.",
                        e
                    ));
                }
            },
            Err(e) => {
                crate::log(&format!(
                    "Failed to read config.json: {}. Using defaults.",
                    e
                ));
            }
        }
    } else {
        crate::log("config.json not found. Using default config.");
    }

    AppConfig::default()
}

/// Initializes the global configuration. Call once at startup.
pub fn init_config() {
    let _ = CONFIG.set(load_config());
}

/// Returns a reference to the global configuration.
/// Panics if called before init_config().
pub fn get_config() -> &'static AppConfig {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
}
