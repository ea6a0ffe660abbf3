//! Cribbage Scorer
//!
//! Scores a cribbage hand from a photo: a multimodal model identifies the
//! five cards, the user picks the starter, and a remote scoring service
//! computes the points.

mod cards;
mod config;
mod detect;
mod gui;
mod paths;
mod score;
mod session;

use anyhow::{Result, anyhow};
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

/// Logs a message to both console and log file with timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    print!("{}", line);
    let log_path = paths::get_logs_dir().join("cribbage_scorer.log");
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) {
        let _ = file.write_all(line.as_bytes());
    }
}

fn main() -> Result<()> {
    // Log panics instead of losing them with the console window
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|loc| format!(" at {}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_default();
        log(&format!("[PANIC]{} {}", location, msg));
    }));

    paths::ensure_directories()?;
    config::init_config();

    log("Starting Cribbage Scorer");
    gui::run().map_err(|e| anyhow!("GUI failed: {}", e))
}
