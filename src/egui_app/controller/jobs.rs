use crate::prediction::{PredictionClient, PredictionError, PredictionResponse};
use crate::workout::WorkoutMetrics;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) request_id: u64,
    pub(crate) client: PredictionClient,
    pub(crate) request: WorkoutMetrics,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictionResponse, PredictionError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    pending_prediction: Option<u64>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            pending_prediction: None,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn next_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.pending_prediction.is_some()
    }

    pub(super) fn is_current_prediction(&self, request_id: u64) -> bool {
        self.pending_prediction == Some(request_id)
    }

    pub(super) fn begin_prediction(&mut self, job: PredictionJob) {
        if self.pending_prediction.is_some() {
            return;
        }
        self.pending_prediction = Some(job.request_id);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = job.client.predict(&job.request);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                request_id: job.request_id,
                result,
            }));
        });
    }

    /// Forget the outstanding request; its result will be ignored on arrival.
    pub(super) fn clear_prediction(&mut self) {
        self.pending_prediction = None;
    }
}
