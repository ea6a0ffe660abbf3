//! GUI module for the application.
//!
//! Provides a graphical interface using egui/eframe: load a photo of five
//! cards, pick the starter, score the hand. Both outbound calls are
//! blocking by design; one submission is one detector call (cached per
//! image fingerprint) followed by one scoring call.

pub mod render;
pub mod state;

use eframe::egui::{self, TextureHandle};
use image::{DynamicImage, GenericImageView};

use crate::config;
use crate::detect::{self, preprocess};
use crate::score::{ScoreClient, ScoreOutcome, ScoreRequest};

use state::{GuiState, ScoreStatus};

/// Main GUI application struct.
pub struct GuiApp {
    /// Application state.
    state: GuiState,
    /// Texture of the downscaled photo currently on screen.
    photo_texture: Option<TextureHandle>,
}

impl GuiApp {
    /// Create a new GUI application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: GuiState::default(),
            photo_texture: None,
        }
    }

    /// Fills the path box from a drag-and-drop and loads the file.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .first()
                .and_then(|file| file.path.clone())
        });
        if let Some(path) = dropped {
            self.state.image_path = path.display().to_string();
            self.load_photo(ctx);
        }
    }

    /// Loads the photo named in the path box and runs detection through the
    /// session cache. Resubmitting unchanged bytes will not call the model
    /// again.
    fn load_photo(&mut self, ctx: &egui::Context) {
        let path = self.state.image_path.trim().to_string();
        if path.is_empty() {
            return;
        }

        self.state.reset_for_new_photo();
        self.photo_texture = None;

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.state.load_error = Some(format!("Could not read {}: {}", path, e));
                return;
            }
        };

        let img = match image::load_from_memory(&bytes) {
            Ok(img) => img,
            Err(e) => {
                self.state.load_error = Some(format!("Could not decode {}: {}", path, e));
                return;
            }
        };

        let config = config::get_config();
        let resized = preprocess::resize_for_upload(&img, config.upload_width);
        self.state.original_size = Some((img.width(), img.height()));
        self.state.upload_size = Some((resized.width(), resized.height()));
        self.photo_texture = Some(make_texture(ctx, &resized));

        let result = self
            .state
            .session
            .hand_for(&bytes, || detect::detect_cards(&img, config));
        if let Err(e) = result {
            crate::log(&format!("Detection failed: {}", e));
            self.state.detection_error = Some(e);
        }
    }

    /// Sends the current hand and starter choice to the scoring service.
    fn score_hand(&mut self) {
        let Some(hand) = self.state.session.cached_hand() else {
            return;
        };
        let lookup = hand.lookup();
        let Some(starter) = self.state.starter.as_deref() else {
            return;
        };
        let Some(code) = lookup.code_for(starter) else {
            return;
        };

        crate::log(&format!(
            "You selected: {}, which is {}",
            lookup.description_for(code).unwrap_or(starter),
            code
        ));

        let request = ScoreRequest::build(hand, code);
        let config = config::get_config();

        self.state.score_status =
            match ScoreClient::from_config(config).and_then(|client| client.score_hand(&request)) {
                Ok(ScoreOutcome::Scored { score, items }) => ScoreStatus::Scored { score, items },
                Ok(ScoreOutcome::NoResult) => ScoreStatus::NoResult,
                Err(e) => {
                    crate::log(&format!("Scoring failed: {}", e));
                    ScoreStatus::Error(e.to_string())
                }
            };
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Cribbage Scorer");
                ui.add_space(8.0);

                if render::render_photo_input(ui, &mut self.state.image_path) {
                    self.load_photo(ctx);
                }

                if let Some(error) = &self.state.load_error {
                    ui.add_space(8.0);
                    ui.colored_label(egui::Color32::LIGHT_RED, error);
                }

                if let (Some(texture), Some(original), Some(upload)) = (
                    &self.photo_texture,
                    self.state.original_size,
                    self.state.upload_size,
                ) {
                    render::render_photo(ui, texture, original, upload);
                }

                let mut score_clicked = false;
                if let Some(error) = &self.state.detection_error {
                    render::render_detection_error(ui, error);
                } else if let Some(lookup) =
                    self.state.session.cached_hand().map(|hand| hand.lookup())
                {
                    score_clicked =
                        render::render_starter_picker(ui, &lookup, &mut self.state.starter);
                }

                render::render_score(ui, &self.state.score_status);

                if score_clicked {
                    self.score_hand();
                }
            });
        });
    }
}

/// Uploads the downscaled photo as an egui texture for display.
fn make_texture(ctx: &egui::Context, img: &DynamicImage) -> TextureHandle {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    ctx.load_texture("photo", color_image, egui::TextureOptions::LINEAR)
}

/// Launches the GUI. Blocks until the window closes.
pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 820.0])
            .with_title("Cribbage Scorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Cribbage Scorer",
        options,
        Box::new(|cc| Ok(Box::new(GuiApp::new(cc)))),
    )
}
