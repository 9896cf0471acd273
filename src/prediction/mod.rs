//! Workout type prediction via the remote FitLab service.

pub mod api;

pub use api::{PredictionClient, PredictionError, PredictionResponse, Probabilities};
