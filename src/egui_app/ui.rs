//! egui renderer for the application UI.

mod fields;
mod form_panel;
mod results_panel;
pub mod style;

use std::time::Duration;

use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Frame, Margin, RichText};

/// Smallest window size that still fits a form row.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 560.0);
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);
const CONTENT_MAX_WIDTH: f32 = 980.0;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create a new egui app, loading configuration from disk.
    pub fn new() -> Result<Self, String> {
        let mut controller = EguiController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self::with_controller(controller))
    }

    /// Wrap an already configured controller.
    pub fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("FitLab")
                            .size(22.0)
                            .strong()
                            .color(palette.accent_ice),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new("AI-Powered Workout Type Prediction System")
                            .color(palette.text_muted),
                    );
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let mut open_logs = false;
                ui.horizontal(|ui| {
                    let status = &self.controller.ui.status;
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 8.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    let response = ui.label(RichText::new(&status.text).color(palette.text_primary));
                    if !status.log.is_empty() {
                        response.on_hover_text(status.log_text());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Logs").clicked() {
                            open_logs = true;
                        }
                        ui.label(
                            RichText::new(self.controller.settings().api.base_url.as_str())
                                .color(palette.text_muted),
                        );
                    });
                });
                if open_logs {
                    self.controller.open_logs_folder();
                }
            });
    }

    fn render_intro(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.label(
            RichText::new("Predict Your Optimal Workout Type")
                .size(18.0)
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(
                "Enter your fitness data below and let our AI model predict the best workout \
                 type for you based on your physical metrics, exercise history, and \
                 nutritional data.",
            )
            .color(palette.text_muted),
        );
    }

    fn render_error_banner(&self, ui: &mut egui::Ui) {
        let Some(message) = self.controller.ui.prediction.last_error.as_deref() else {
            return;
        };
        ui.add_space(12.0);
        Frame::new()
            .fill(style::section_fill())
            .stroke(style::error_outline())
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("⚠").color(style::error_text()));
                    ui.label(RichText::new(message).color(style::error_text()));
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_background_jobs();
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(CONTENT_MAX_WIDTH);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ui.add_space(12.0);
                            self.render_intro(ui);
                            ui.add_space(12.0);
                            self.render_form(ui);
                            self.render_error_banner(ui);
                            self.render_results(ui);
                            ui.add_space(24.0);
                        });
                    });
                });
        });
        if self.controller.is_prediction_pending() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
