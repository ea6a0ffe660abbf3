//! GUI application state management.
//!
//! Tracks the submitted photo, the detection outcome, the starter choice,
//! and the latest scoring result for display.

use crate::detect::DetectError;
use crate::session::Session;

/// Scoring outcome for display below the starter picker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScoreStatus {
    /// Nothing scored yet for the current photo
    #[default]
    Idle,
    /// Score plus its line items, one per pipe-delimited segment
    Scored { score: i64, items: Vec<String> },
    /// Service answered without a score to display
    NoResult,
    /// Scoring call failed
    Error(String),
}

impl ScoreStatus {
    /// Headline text for the current status.
    pub fn status_text(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Scored { score, .. } => format!("The score was {}", score),
            Self::NoResult => "No score available".to_string(),
            Self::Error(msg) => format!("Error: {}", msg),
        }
    }
}

/// Everything one user session carries between frames.
pub struct GuiState {
    /// Photo path text box (also filled by drag-and-drop).
    pub image_path: String,
    /// Dimensions of the photo as loaded.
    pub original_size: Option<(u32, u32)>,
    /// Dimensions after downscaling for upload.
    pub upload_size: Option<(u32, u32)>,
    /// Why the photo could not be loaded from disk, if it could not.
    pub load_error: Option<String>,
    /// Detection cache for the current session.
    pub session: Session,
    /// Why the last detection produced no hand, if it failed.
    pub detection_error: Option<DetectError>,
    /// Description of the chosen starter card.
    pub starter: Option<String>,
    /// Latest scoring outcome.
    pub score_status: ScoreStatus,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            original_size: None,
            upload_size: None,
            load_error: None,
            session: Session::new(),
            detection_error: None,
            starter: None,
            score_status: ScoreStatus::Idle,
        }
    }
}

impl GuiState {
    /// Resets per-submission state before handling a new photo. The session
    /// cache survives; it invalidates itself on a fingerprint change.
    pub fn reset_for_new_photo(&mut self) {
        self.original_size = None;
        self.upload_size = None;
        self.load_error = None;
        self.detection_error = None;
        self.starter = None;
        self.score_status = ScoreStatus::Idle;
    }
}
