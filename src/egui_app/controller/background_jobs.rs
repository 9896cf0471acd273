use super::jobs::JobMessage;
use super::*;
use std::sync::mpsc::TryRecvError;

impl EguiController {
    /// Drain finished background work and fold it into UI state.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::PredictionFinished(message) => self.apply_prediction_result(message),
            }
        }
    }
}
