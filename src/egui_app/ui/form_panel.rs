use super::EguiApp;
use super::fields::NumericInput;
use super::style;
use crate::workout::{FormSection, MetricField};
use eframe::egui::{self, Frame, Margin, RichText};

/// Width of one label/input cell in the section grids.
const FIELD_WIDTH: f32 = 210.0;
const FIELD_COLUMNS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormAction {
    None,
    Submit,
    Reset,
}

impl EguiApp {
    /// Render the four form sections and the submit/reset buttons.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        let loading = self.controller.ui.prediction.loading;
        ui.add_enabled_ui(!loading, |ui| {
            for section in FormSection::ALL {
                self.render_section(ui, section);
                ui.add_space(10.0);
            }
        });

        let action = self.render_form_actions(ui, loading);
        match action {
            FormAction::None => {}
            FormAction::Submit => self.controller.submit_prediction(),
            FormAction::Reset => self.controller.reset_form(),
        }
    }

    fn render_section(&mut self, ui: &mut egui::Ui, section: FormSection) {
        let palette = style::palette();
        Frame::new()
            .fill(style::section_fill())
            .stroke(style::section_border())
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(section.title())
                        .size(16.0)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.add_space(8.0);
                egui::Grid::new(("form_section", section.title()))
                    .num_columns(FIELD_COLUMNS)
                    .spacing([18.0, 12.0])
                    .min_col_width(FIELD_WIDTH)
                    .show(ui, |ui| {
                        for (position, field) in section.fields().iter().enumerate() {
                            self.render_field(ui, *field);
                            if (position + 1) % FIELD_COLUMNS == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });
    }

    fn render_field(&mut self, ui: &mut egui::Ui, field: MetricField) {
        let palette = style::palette();
        let error = self.controller.ui.prediction.form.errors().get(field);
        let mut value = self.controller.ui.prediction.form.fields().get(field).to_string();
        let id = egui::Id::new(("metric_input", field.key()));

        ui.vertical(|ui| {
            ui.set_width(FIELD_WIDTH);
            ui.horizontal(|ui| {
                ui.label(RichText::new(field.label()).color(palette.text_primary));
                ui.label(RichText::new("*").color(style::error_text()));
            });
            let (response, step) = NumericInput::new(&mut value, id)
                .width(FIELD_WIDTH)
                .hint(field.placeholder())
                .invalid(error.is_some())
                .show(ui);
            if self.controller.ui.prediction.focus_requested == Some(field) {
                response.request_focus();
                self.controller.ui.prediction.focus_requested = None;
            }
            if let Some(step) = step {
                self.controller.nudge_field(field, step);
            } else if response.changed() {
                self.controller.update_field(field, value);
            }
            if let Some(help) = field.help_text() {
                ui.label(RichText::new(help).small().color(palette.text_muted));
            }
            if let Some(error) = error {
                ui.label(RichText::new(error.to_string()).small().color(style::error_text()));
            }
        });
    }

    fn render_form_actions(&self, ui: &mut egui::Ui, loading: bool) -> FormAction {
        let prediction = &self.controller.ui.prediction;
        let mut action = FormAction::None;
        ui.horizontal(|ui| {
            let submit = egui::Button::new(
                RichText::new(prediction.submit_label())
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(style::probability_bar_color(true))
            .min_size(egui::vec2(200.0, 32.0));
            if ui.add_enabled(!loading, submit).clicked() {
                action = FormAction::Submit;
            }
            ui.add_space(8.0);
            let reset = egui::Button::new("Reset Form").min_size(egui::vec2(120.0, 32.0));
            if ui.add_enabled(!loading, reset).clicked() {
                action = FormAction::Reset;
            }
            if loading {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
        action
    }
}
