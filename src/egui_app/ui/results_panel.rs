use super::EguiApp;
use super::style;
use crate::egui_app::state::{PredictionResultsView, ProbabilityBarView};
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText};

const BAR_HEIGHT: f32 = 18.0;
const BAR_LABEL_WIDTH: f32 = 160.0;
const BAR_VALUE_WIDTH: f32 = 72.0;

impl EguiApp {
    /// Render the latest prediction, if there is one.
    pub(super) fn render_results(&self, ui: &mut egui::Ui) {
        let Some(results) = self.controller.ui.prediction.results.as_ref() else {
            return;
        };
        ui.add_space(16.0);
        Frame::new()
            .fill(style::section_fill())
            .stroke(style::section_border())
            .inner_margin(Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                render_summary(ui, results);
                ui.add_space(14.0);
                render_distribution(ui, results);
                ui.add_space(12.0);
                ui.label(
                    RichText::new(
                        "Note: This prediction is based on machine learning analysis of your \
                         input data. Consult with a fitness professional for personalized advice.",
                    )
                    .small()
                    .italics()
                    .color(style::palette().text_muted),
                );
            });
    }
}

fn render_summary(ui: &mut egui::Ui, results: &PredictionResultsView) {
    let palette = style::palette();
    ui.label(
        RichText::new("Recommended Workout Type")
            .size(16.0)
            .strong()
            .color(palette.text_primary),
    );
    ui.add_space(6.0);
    ui.label(
        RichText::new(&results.workout_type)
            .size(26.0)
            .strong()
            .color(palette.accent_ice),
    );
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("Confidence").color(palette.text_muted));
        Frame::new()
            .fill(results.confidence_color)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::symmetric(10, 3))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(&results.confidence_text)
                        .strong()
                        .color(style::confidence_text(results.confidence_tier)),
                );
            });
    });
}

fn render_distribution(ui: &mut egui::Ui, results: &PredictionResultsView) {
    let palette = style::palette();
    ui.label(
        RichText::new("Probability Distribution")
            .size(15.0)
            .strong()
            .color(palette.text_primary),
    );
    ui.label(
        RichText::new("Below are the probabilities for all possible workout types:")
            .color(palette.text_muted),
    );
    ui.add_space(8.0);
    for bar in &results.bars {
        render_bar(ui, bar);
        ui.add_space(4.0);
    }
}

fn render_bar(ui: &mut egui::Ui, bar: &ProbabilityBarView) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        let label = RichText::new(&bar.label).color(palette.text_primary);
        let label = if bar.is_predicted { label.strong() } else { label };
        ui.add_sized([BAR_LABEL_WIDTH, BAR_HEIGHT], egui::Label::new(label).truncate());

        let track_width = (ui.available_width() - BAR_VALUE_WIDTH).max(40.0);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(track_width, BAR_HEIGHT), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let radius = CornerRadius::same(4);
        painter.rect_filled(rect, radius, style::bar_track());
        let fill_width = track_width * bar.fraction.max(0.0);
        if fill_width > 0.0 {
            let fill = egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, BAR_HEIGHT));
            painter.rect_filled(fill, radius, bar.color);
        }

        ui.add_sized(
            [BAR_VALUE_WIDTH, BAR_HEIGHT],
            egui::Label::new(RichText::new(&bar.value_text).color(palette.text_primary)),
        );
    });
}
