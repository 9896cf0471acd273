//! Controller that owns UI state and bridges the form to the prediction client.

mod background_jobs;
mod jobs;
mod prediction;


use crate::config::{self, AppSettings, ConfigError};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use crate::prediction::PredictionClient;
use jobs::ControllerJobs;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    /// State read by the renderer each frame.
    pub ui: UiState,
    settings: AppSettings,
    client: PredictionClient,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Create a controller that talks to the default service address.
    pub fn new() -> Self {
        let settings = AppSettings::default();
        Self {
            ui: UiState::default(),
            client: PredictionClient::new(settings.api.base_url.clone()),
            settings,
            jobs: ControllerJobs::new(),
        }
    }

    /// Load settings from disk and the environment.
    ///
    /// An unusable config folder is reported in the status bar and the app
    /// keeps running on defaults plus the environment override.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        let loaded = config::load_or_default()?;
        self.apply_settings(loaded.settings);
        if let Some(err) = loaded.fallback {
            self.set_status(
                format!("Using default settings: {err}"),
                StatusTone::Warning,
            );
        }
        Ok(())
    }

    /// Point the prediction client at the configured service.
    pub fn apply_settings(&mut self, settings: AppSettings) {
        tracing::info!("Prediction service: {}", settings.api.base_url);
        self.client = PredictionClient::new(settings.api.base_url.clone());
        self.settings = settings;
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Open the log folder in the OS file explorer.
    pub fn open_logs_folder(&mut self) {
        match crate::app_dirs::logs_dir() {
            Ok(path) => {
                if let Err(err) = open::that(&path) {
                    self.set_status(
                        format!("Could not open logs folder {}: {err}", path.display()),
                        StatusTone::Error,
                    );
                }
            }
            Err(err) => {
                self.set_status(
                    format!("Could not resolve logs folder: {err}"),
                    StatusTone::Error,
                );
            }
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text.into(), tone);
    }
}

impl Default for EguiController {
    fn default() -> Self {
        Self::new()
    }
}
