//! Card detection pipeline: photo → resized JPEG → vision model → validated
//! five-card hand.

pub mod client;
pub mod parse;
pub mod preprocess;

use image::DynamicImage;
use thiserror::Error;

use crate::cards::{HAND_SIZE, Hand};
use crate::config::AppConfig;
use client::DetectorClient;

/// Why a submission produced no usable hand. All variants are terminal for
/// the current submission; the session stays usable for a new image.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Transport or API failure; retry by resubmitting the image.
    #[error("card detection unavailable: {0}")]
    Unavailable(String),
    /// The model replied, but not with a usable card list.
    #[error("could not identify a valid hand")]
    InvalidResponse {
        /// Raw payload, kept for display.
        raw: String,
    },
    /// The model returned a card list that is not exactly five cards.
    #[error("expected {HAND_SIZE} cards, found {found}")]
    WrongCardCount { found: usize, raw: String },
}

impl DetectError {
    /// Raw payload worth showing alongside the error, if any.
    pub fn raw_payload(&self) -> Option<&str> {
        match self {
            DetectError::Unavailable(_) => None,
            DetectError::InvalidResponse { raw } | DetectError::WrongCardCount { raw, .. } => {
                Some(raw)
            }
        }
    }
}

/// Runs one blocking detection for a submitted photo.
pub fn detect_cards(img: &DynamicImage, config: &AppConfig) -> Result<Hand, DetectError> {
    let resized = preprocess::resize_for_upload(img, config.upload_width);
    let encoded = preprocess::encode_jpeg_base64(&resized)
        .map_err(|e| DetectError::Unavailable(format!("failed to encode image: {}", e)))?;

    let client = DetectorClient::from_config(config)?;
    crate::log(&format!(
        "Asking {} to identify cards ({}px upload)",
        config.model, config.upload_width
    ));
    let content = client.identify_cards(&encoded)?;
    crate::log(&format!("Model replied: {}", content));

    parse::parse_hand(&content)
}
