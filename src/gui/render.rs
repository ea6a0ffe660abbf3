//! GUI rendering functions.
//!
//! Contains UI layout and component rendering logic.

use eframe::egui::{self, Color32, RichText, TextureHandle, Vec2};

use super::state::ScoreStatus;
use crate::cards::HandLookup;
use crate::detect::DetectError;

/// Render the photo path input row.
/// Returns true when the user asked to load the photo.
pub fn render_photo_input(ui: &mut egui::Ui, image_path: &mut String) -> bool {
    let mut load_clicked = false;

    ui.horizontal(|ui| {
        ui.label("Photo:");
        let edit = ui.add(
            egui::TextEdit::singleline(image_path)
                .hint_text("Path to a photo of five cards (or drop a file here)")
                .desired_width(360.0),
        );
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            load_clicked = true;
        }
        if ui.button("Load photo").clicked() {
            load_clicked = true;
        }
    });

    load_clicked
}

/// Render the submitted photo with its before/after dimensions.
pub fn render_photo(
    ui: &mut egui::Ui,
    texture: &TextureHandle,
    original_size: (u32, u32),
    upload_size: (u32, u32),
) {
    ui.add_space(8.0);
    ui.label(format!(
        "Current image size: {}x{}",
        original_size.0, original_size.1
    ));
    ui.label(format!(
        "Resized to {}x{} for card detection",
        upload_size.0, upload_size.1
    ));

    // Fit the preview into the available width without distorting it
    let available = ui.available_width().min(upload_size.0 as f32);
    let scale = available / upload_size.0 as f32;
    let size = Vec2::new(available, upload_size.1 as f32 * scale);
    ui.image((texture.id(), size));
}

/// Render a detection failure in place of the starter picker.
pub fn render_detection_error(ui: &mut egui::Ui, error: &DetectError) {
    ui.add_space(8.0);
    ui.label(
        RichText::new("Sorry, could not see a valid hand in this photo")
            .color(Color32::LIGHT_RED)
            .strong(),
    );
    ui.label(error.to_string());
    if let Some(raw) = error.raw_payload() {
        ui.add_space(4.0);
        ui.label("The raw response was:");
        ui.code(raw);
    }
}

/// Render the starter selection radio list.
/// Returns true when "Score hand" was clicked.
pub fn render_starter_picker(
    ui: &mut egui::Ui,
    lookup: &HandLookup,
    starter: &mut Option<String>,
) -> bool {
    ui.add_space(8.0);
    ui.separator();
    ui.label(RichText::new("Please choose your starter card:").strong());

    // Default to the first detected card
    if starter.is_none() {
        *starter = lookup.descriptions().next().map(str::to_string);
    }

    for description in lookup.descriptions() {
        let selected = starter.as_deref() == Some(description);
        if ui.radio(selected, description).clicked() {
            *starter = Some(description.to_string());
        }
    }

    if let Some(choice) = starter.as_deref() {
        if let Some(code) = lookup.code_for(choice) {
            ui.label(format!("You selected: {}, which is {}", choice, code));
        }
    }

    ui.add_space(8.0);
    ui.button("Score hand").clicked()
}

/// Render the scoring outcome: score headline plus one line per item.
pub fn render_score(ui: &mut egui::Ui, status: &ScoreStatus) {
    if *status == ScoreStatus::Idle {
        return;
    }

    ui.add_space(8.0);
    ui.separator();

    match status {
        ScoreStatus::Idle => {}
        ScoreStatus::Scored { items, .. } => {
            ui.label(RichText::new(status.status_text()).strong());
            for item in items {
                ui.label(format!("• {}", item));
            }
        }
        ScoreStatus::NoResult => {
            ui.label(status.status_text());
        }
        ScoreStatus::Error(_) => {
            ui.label(RichText::new(status.status_text()).color(Color32::LIGHT_RED));
        }
    }
}
