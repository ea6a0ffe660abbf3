//! Scoring: hand/starter reconciliation plus the remote scoring call.

pub mod client;
pub mod request;

pub use client::{ScoreClient, ScoreOutcome};
pub use request::ScoreRequest;

use thiserror::Error;

/// Failure talking to the scoring service. Terminal for the current
/// submission; the UI shows it in place of a score.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("scoring service unavailable: {0}")]
    Unavailable(String),
    /// The service replied 2xx with a body that is not JSON.
    #[error("scoring service returned an unreadable reply")]
    InvalidBody { raw: String },
}
