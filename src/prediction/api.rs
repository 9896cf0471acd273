//! HTTP client for the workout prediction service.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use url::Url;

use crate::http_client;
use crate::logging::PREDICTION_TARGET;
use crate::workout::WorkoutMetrics;

/// Path appended to the configured base URL.
pub const PREDICT_PATH: &str = "/predict";
/// Shown when the service answered with an error status but no message.
pub const SERVER_ERROR_FALLBACK: &str = "Prediction failed";
/// Shown when the request left but no response came back.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect to the server. Please check if the backend is running.";
/// Shown when a local failure carries no message of its own.
pub const CLIENT_ERROR_FALLBACK: &str = "An unexpected error occurred";

const MAX_PREDICTION_RESPONSE_BYTES: usize = 256 * 1024;

/// Predicted workout type with the full probability distribution.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionResponse {
    /// Predicted workout label.
    pub prediction: String,
    /// Percentage (0-100) assigned to the predicted label.
    pub confidence: f64,
    /// Percentage per label, in the order the service listed them.
    pub probabilities: Probabilities,
}

/// Label/percentage pairs that keep the service's key order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Probabilities(Vec<(String, f64)>);

impl Probabilities {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, value)| (label.as_str(), *value))
    }
}

impl<'de> Deserialize<'de> for Probabilities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMap;

        impl<'de> Visitor<'de> for OrderedMap {
            type Value = Probabilities;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of label to percentage")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, f64)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, value)) = map.next_entry::<String, f64>()? {
                    match entries.iter_mut().find(|(name, _)| *name == label) {
                        Some(existing) => existing.1 = value,
                        None => entries.push((label, value)),
                    }
                }
                Ok(Probabilities(entries))
            }
        }

        deserializer.deserialize_map(OrderedMap)
    }
}

/// Why a prediction could not be produced, carrying the message to display.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    /// The service responded with a non-success status.
    #[error("{0}")]
    Server(String),
    /// The request was sent but no response arrived.
    #[error("{0}")]
    Network(String),
    /// The request could not be built or its response could not be read.
    #[error("{0}")]
    Client(String),
}

impl PredictionError {
    /// Text shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Server(message) | Self::Network(message) | Self::Client(message) => message,
        }
    }

    fn client(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Client(CLIENT_ERROR_FALLBACK.to_string())
        } else {
            Self::Client(message)
        }
    }
}

/// Sends workout metrics to `{base_url}/predict`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionClient {
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full endpoint URL, rejecting bases that cannot carry an HTTP request.
    pub fn endpoint(&self) -> Result<Url, PredictionError> {
        let joined = format!("{}{PREDICT_PATH}", self.base_url.trim().trim_end_matches('/'));
        let url = Url::parse(&joined)
            .map_err(|err| PredictionError::client(format!("Invalid API URL {joined}: {err}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(PredictionError::client(format!(
                "Unsupported API URL scheme: {other}"
            ))),
        }
    }

    /// Issue one prediction request. Blocks until the service answers.
    pub fn predict(&self, request: &WorkoutMetrics) -> Result<PredictionResponse, PredictionError> {
        let url = self.endpoint()?;
        tracing::debug!(target: PREDICTION_TARGET, "POST {url}");
        let response = match http_client::agent()
            .post(url.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .send_json(request)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
                    .unwrap_or_default();
                tracing::warn!(
                    target: PREDICTION_TARGET,
                    "Prediction service returned HTTP {code}"
                );
                return Err(map_status_error(&body));
            }
            Err(ureq::Error::Transport(err)) => return Err(map_transport_error(&err)),
        };

        let body = http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::InvalidData => PredictionError::client(err.to_string()),
                _ => PredictionError::Network(NETWORK_ERROR_MESSAGE.to_string()),
            })?;
        parse_prediction_response(&body)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn map_status_error(body: &str) -> PredictionError {
    let message = serde_json::from_str::<ErrorBody>(body.trim())
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
    PredictionError::Server(message)
}

fn map_transport_error(err: &ureq::Transport) -> PredictionError {
    use ureq::ErrorKind;
    match err.kind() {
        ErrorKind::InvalidUrl
        | ErrorKind::UnknownScheme
        | ErrorKind::InvalidProxyUrl
        | ErrorKind::InsecureRequestHttpsOnly
        | ErrorKind::HTTP => PredictionError::client(err.to_string()),
        _ => {
            tracing::warn!(
                target: PREDICTION_TARGET,
                "Prediction request got no response: {err}"
            );
            PredictionError::Network(NETWORK_ERROR_MESSAGE.to_string())
        }
    }
}

fn parse_prediction_response(body: &str) -> Result<PredictionResponse, PredictionError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictionError::client("Empty prediction response"));
    }
    serde_json::from_str(trimmed)
        .map_err(|err| PredictionError::client(format!("Invalid prediction response: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{json_response, serve_once};
    use crate::workout::MetricField;
    use std::net::TcpListener;
    use std::time::Duration;

    fn sample_metrics() -> WorkoutMetrics {
        WorkoutMetrics::from_fn(|field| match field {
            MetricField::ExperienceLevel => 2.0,
            other => other.index() as f64 + 0.5,
        })
    }

    #[test]
    fn parses_response_keeping_label_order() {
        let body = r#"{ "prediction": "Yoga", "confidence": 40.0,
            "probabilities": { "Yoga": 40.0, "Cardio": 35.0, "HIIT": 25.0 } }"#;
        let parsed = parse_prediction_response(body).unwrap();
        assert_eq!(parsed.prediction, "Yoga");
        let labels: Vec<_> = parsed.probabilities.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["Yoga", "Cardio", "HIIT"]);
        assert_eq!(parsed.probabilities.get("HIIT"), Some(25.0));
    }

    #[test]
    fn malformed_success_body_is_client_error() {
        let err = parse_prediction_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, PredictionError::Client(_)));
        assert!(err.message().starts_with("Invalid prediction response"));
    }

    #[test]
    fn status_error_uses_body_message_or_fallback() {
        assert_eq!(
            map_status_error(r#"{ "error": "model unavailable" }"#),
            PredictionError::Server("model unavailable".into())
        );
        assert_eq!(
            map_status_error("Internal Server Error"),
            PredictionError::Server(SERVER_ERROR_FALLBACK.into())
        );
        assert_eq!(
            map_status_error(r#"{ "error": "" }"#),
            PredictionError::Server(SERVER_ERROR_FALLBACK.into())
        );
    }

    #[test]
    fn endpoint_appends_predict_path() {
        let client = PredictionClient::new("http://localhost:5000/");
        assert_eq!(client.endpoint().unwrap().as_str(), "http://localhost:5000/predict");
        let prefixed = PredictionClient::new("https://fitlab.example/api");
        assert_eq!(
            prefixed.endpoint().unwrap().as_str(),
            "https://fitlab.example/api/predict"
        );
    }

    #[test]
    fn endpoint_rejects_unusable_bases() {
        let err = PredictionClient::new("not a url").endpoint().unwrap_err();
        assert!(matches!(err, PredictionError::Client(_)));
        let err = PredictionClient::new("ftp://files.example").endpoint().unwrap_err();
        assert_eq!(err.message(), "Unsupported API URL scheme: ftp");
    }

    #[test]
    fn blank_client_message_uses_fallback() {
        assert_eq!(PredictionError::client("  ").message(), CLIENT_ERROR_FALLBACK);
    }

    #[test]
    fn predict_posts_metrics_and_reads_response() {
        let body = r#"{"prediction":"Cardio","confidence":82.5,"probabilities":{"Cardio":82.5,"Strength":17.5}}"#;
        let (url, request_rx) = serve_once(json_response("200 OK", body));
        let response = PredictionClient::new(url).predict(&sample_metrics()).unwrap();
        assert_eq!(response.prediction, "Cardio");
        assert_eq!(response.confidence, 82.5);

        let request = request_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(request.starts_with("POST /predict HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
        let (_, json) = request.split_once("\r\n\r\n").unwrap();
        let sent: serde_json::Value = serde_json::from_str(json).unwrap();
        let object = sent.as_object().unwrap();
        assert_eq!(object.len(), MetricField::COUNT);
        assert!(object.values().all(serde_json::Value::is_number));
        assert_eq!(object["Experience_Level"].as_f64(), Some(2.0));
    }

    #[test]
    fn predict_surfaces_server_error_message() {
        let (url, _) = serve_once(json_response(
            "503 Service Unavailable",
            r#"{ "error": "model unavailable" }"#,
        ));
        let err = PredictionClient::new(url).predict(&sample_metrics()).unwrap_err();
        assert_eq!(err, PredictionError::Server("model unavailable".into()));
    }

    #[test]
    fn predict_without_listener_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = PredictionClient::new(format!("http://{addr}"))
            .predict(&sample_metrics())
            .unwrap_err();
        assert_eq!(err, PredictionError::Network(NETWORK_ERROR_MESSAGE.into()));
    }
}
