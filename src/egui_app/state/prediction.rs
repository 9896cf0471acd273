use super::PredictionResultsView;
use crate::workout::{MetricField, WorkoutForm};

/// UI state for the prediction form and its outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionUiState {
    /// Raw inputs and their inline errors.
    pub form: WorkoutForm,
    /// True while a request is outstanding; inputs and buttons are disabled.
    pub loading: bool,
    /// Message from the last failed request.
    pub last_error: Option<String>,
    /// Ranked results from the last successful request.
    pub results: Option<PredictionResultsView>,
    /// Field that should take keyboard focus on the next frame.
    pub focus_requested: Option<MetricField>,
}

impl PredictionUiState {
    /// Label for the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Predicting..."
        } else {
            "Predict Workout Type"
        }
    }
}
