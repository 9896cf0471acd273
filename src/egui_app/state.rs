//! Shared state types for the egui UI.

mod prediction;
mod results;
mod status;

pub use prediction::*;
pub use results::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Footer status badge and message.
    pub status: StatusBarState,
    /// Form inputs, request progress and the last outcome.
    pub prediction: PredictionUiState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            prediction: PredictionUiState::default(),
        }
    }
}
