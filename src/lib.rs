//! Library exports for the FitLab desktop client and its tests.
/// Application data directories.
pub mod app_dirs;
/// User configuration loading.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Blocking HTTP helpers.
pub mod http_client;
/// File logging setup.
pub mod logging;
/// Prediction service client.
pub mod prediction;
/// Workout metrics form and validation.
pub mod workout;
