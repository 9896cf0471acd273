use eframe::egui;

use super::style;

/// Single-line text input for numeric values.
///
/// Arrow up/down report a step so the caller can adjust the value, and the
/// text is selected on focus. Inputs with an error get a red outline.
pub struct NumericInput<'a> {
    value: &'a mut String,
    id: egui::Id,
    width: f32,
    hint: String,
    invalid: bool,
}

impl<'a> NumericInput<'a> {
    pub fn new(value: &'a mut String, id: egui::Id) -> Self {
        Self {
            value,
            id,
            width: 160.0,
            hint: String::new(),
            invalid: false,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Display the input field. Returns the response and the requested step
    /// (+1.0 for ArrowUp, -1.0 for ArrowDown), if any.
    pub fn show(self, ui: &mut egui::Ui) -> (egui::Response, Option<f64>) {
        let mut step = 0.0;

        // Consume arrow keys before TextEdit moves the cursor with them.
        if ui.memory(|m| m.has_focus(self.id)) {
            ui.input_mut(|i| {
                if i.key_pressed(egui::Key::ArrowUp) {
                    step = 1.0;
                } else if i.key_pressed(egui::Key::ArrowDown) {
                    step = -1.0;
                }
                if step != 0.0 {
                    i.events.retain(|e| {
                        !matches!(
                            e,
                            egui::Event::Key {
                                key: egui::Key::ArrowUp | egui::Key::ArrowDown,
                                ..
                            }
                        )
                    });
                }
            });
        }

        let output = egui::TextEdit::singleline(self.value)
            .id(self.id)
            .desired_width(self.width)
            .hint_text(self.hint)
            .show(ui);
        let response = output.response;

        if self.invalid {
            ui.painter().rect_stroke(
                response.rect,
                0.0,
                style::error_outline(),
                egui::StrokeKind::Outside,
            );
        }

        if response.gained_focus() {
            let mut state = output.state;
            state
                .cursor
                .set_char_range(Some(egui::text::CCursorRange::select_all(&output.galley)));
            state.store(ui.ctx(), response.id);
        }

        (response, (step != 0.0).then_some(step))
    }
}
