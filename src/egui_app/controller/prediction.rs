use super::jobs::{PredictionJob, PredictionJobResult};
use super::*;
use crate::egui_app::view_model;
use crate::logging::PREDICTION_TARGET;
use crate::workout::{MetricField, ValidationErrors};

/// Shown when a failed request carries no message at all.
const PREDICTION_ERROR_FALLBACK: &str = "An error occurred while predicting workout type";

impl EguiController {
    /// Store raw input for a field, clearing that field's inline error.
    pub fn update_field(&mut self, field: MetricField, value: impl Into<String>) {
        if self.ui.prediction.loading {
            return;
        }
        self.ui.prediction.form.update_field(field, value);
    }

    /// Step a field's value up or down, as the arrow keys do.
    pub fn nudge_field(&mut self, field: MetricField, delta: f64) {
        if self.ui.prediction.loading {
            return;
        }
        self.ui.prediction.form.nudge_field(field, delta);
    }

    /// Compute the errors the form would show on submit.
    pub fn validate_form(&self) -> ValidationErrors {
        self.ui.prediction.form.validate()
    }

    /// Validate the form and, when valid, send it to the prediction service.
    ///
    /// Ignored while a request is already outstanding.
    pub fn submit_prediction(&mut self) {
        if self.ui.prediction.loading || self.jobs.prediction_in_progress() {
            return;
        }
        let Some(request) = self.ui.prediction.form.submit() else {
            let errors = self.ui.prediction.form.errors();
            let count = errors.len();
            self.ui.prediction.focus_requested = errors.first();
            tracing::info!(
                target: PREDICTION_TARGET,
                "Prediction blocked by {count} invalid field(s)"
            );
            let suffix = if count == 1 { "" } else { "s" };
            self.set_status(format!("{count} field{suffix} need attention"), StatusTone::Warning);
            return;
        };

        self.ui.prediction.loading = true;
        self.ui.prediction.last_error = None;
        self.ui.prediction.results = None;
        let request_id = self.jobs.next_request_id();
        tracing::info!(
            target: PREDICTION_TARGET,
            request_id,
            "Submitting prediction to {}",
            self.client.base_url()
        );
        self.set_status("Predicting workout type...", StatusTone::Busy);
        self.jobs.begin_prediction(PredictionJob {
            request_id,
            client: self.client.clone(),
            request,
        });
    }

    /// Clear inputs, errors, results and any error banner.
    ///
    /// A request still in flight is abandoned and its result dropped.
    pub fn reset_form(&mut self) {
        self.jobs.clear_prediction();
        self.ui.prediction.loading = false;
        self.ui.prediction.form.reset();
        self.ui.prediction.last_error = None;
        self.ui.prediction.results = None;
        self.ui.prediction.focus_requested = None;
        tracing::debug!(target: PREDICTION_TARGET, "Form reset");
        self.set_status("Form cleared", StatusTone::Idle);
    }

    /// True while a prediction request is outstanding.
    pub fn is_prediction_pending(&self) -> bool {
        self.ui.prediction.loading
    }

    pub(super) fn apply_prediction_result(&mut self, message: PredictionJobResult) {
        if !self.jobs.is_current_prediction(message.request_id) {
            tracing::debug!(
                target: PREDICTION_TARGET,
                request_id = message.request_id,
                "Dropping stale prediction result"
            );
            return;
        }
        self.jobs.clear_prediction();
        self.ui.prediction.loading = false;
        match message.result {
            Ok(response) => {
                tracing::info!(
                    target: PREDICTION_TARGET,
                    request_id = message.request_id,
                    "Predicted {} ({:.2}% confidence)",
                    response.prediction,
                    response.confidence
                );
                let view = view_model::prediction_results(&response);
                self.set_status(
                    format!("Recommended workout: {}", view.workout_type),
                    StatusTone::Info,
                );
                self.ui.prediction.last_error = None;
                self.ui.prediction.results = Some(view);
            }
            Err(err) => {
                tracing::warn!(
                    target: PREDICTION_TARGET,
                    request_id = message.request_id,
                    "Prediction failed: {err}"
                );
                let text = match err.message().trim() {
                    "" => PREDICTION_ERROR_FALLBACK.to_string(),
                    message => message.to_string(),
                };
                self.set_status(format!("Prediction failed: {text}"), StatusTone::Error);
                self.ui.prediction.results = None;
                self.ui.prediction.last_error = Some(text);
            }
        }
    }
}
