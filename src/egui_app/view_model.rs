//! Helpers to convert domain data into egui-facing view structs.

use crate::egui_app::state::{ConfidenceTier, PredictionResultsView, ProbabilityBarView};
use crate::egui_app::ui::style;
use crate::prediction::PredictionResponse;

/// Minimum confidence (percent) for the good tier.
pub const GOOD_CONFIDENCE: f64 = 80.0;
/// Minimum confidence (percent) for the warning tier.
pub const WARNING_CONFIDENCE: f64 = 60.0;

/// Classify a confidence percentage for badge coloring.
pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
    if confidence >= GOOD_CONFIDENCE {
        ConfidenceTier::Good
    } else if confidence >= WARNING_CONFIDENCE {
        ConfidenceTier::Warning
    } else {
        ConfidenceTier::Bad
    }
}

/// Format a percentage with two decimals, as shown on badges and bars.
pub fn percent_text(value: f64) -> String {
    format!("{value:.2}%")
}

/// Build the ranked results view for a prediction.
///
/// Labels are ordered by descending probability; equal probabilities keep the
/// order the service listed them in.
pub fn prediction_results(response: &PredictionResponse) -> PredictionResultsView {
    let mut ranked: Vec<(&str, f64)> = response.probabilities.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let bars = ranked
        .into_iter()
        .map(|(label, percent)| {
            let is_predicted = label == response.prediction;
            ProbabilityBarView {
                label: label.to_string(),
                percent,
                fraction: (percent / 100.0) as f32,
                value_text: percent_text(percent),
                is_predicted,
                color: style::probability_bar_color(is_predicted),
            }
        })
        .collect();
    let tier = confidence_tier(response.confidence);
    PredictionResultsView {
        workout_type: response.prediction.clone(),
        confidence_text: percent_text(response.confidence),
        confidence_tier: tier,
        confidence_color: style::confidence_color(tier),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::Probabilities;

    fn response(prediction: &str, confidence: f64, entries: &[(&str, f64)]) -> PredictionResponse {
        PredictionResponse {
            prediction: prediction.to_string(),
            confidence,
            probabilities: Probabilities::new(
                entries
                    .iter()
                    .map(|(label, value)| (label.to_string(), *value))
                    .collect(),
            ),
        }
    }

    #[test]
    fn ranks_cardio_before_strength_with_good_badge() {
        let view = prediction_results(&response(
            "Cardio",
            82.5,
            &[("Strength", 17.5), ("Cardio", 82.5)],
        ));
        let labels: Vec<_> = view.bars.iter().map(|bar| bar.label.as_str()).collect();
        assert_eq!(labels, ["Cardio", "Strength"]);
        assert_eq!(view.confidence_tier, ConfidenceTier::Good);
        assert_eq!(view.confidence_text, "82.50%");
        assert!(view.bars[0].is_predicted);
        assert!(!view.bars[1].is_predicted);
        assert_ne!(view.bars[0].color, view.bars[1].color);
        assert_eq!(view.bars[1].value_text, "17.50%");
    }

    #[test]
    fn ties_keep_service_order() {
        let view = prediction_results(&response(
            "Yoga",
            30.0,
            &[("Yoga", 30.0), ("HIIT", 20.0), ("Cardio", 30.0), ("Strength", 20.0)],
        ));
        let labels: Vec<_> = view.bars.iter().map(|bar| bar.label.as_str()).collect();
        assert_eq!(labels, ["Yoga", "Cardio", "HIIT", "Strength"]);
    }

    #[test]
    fn confidence_tiers_follow_thresholds() {
        assert_eq!(confidence_tier(100.0), ConfidenceTier::Good);
        assert_eq!(confidence_tier(80.0), ConfidenceTier::Good);
        assert_eq!(confidence_tier(79.99), ConfidenceTier::Warning);
        assert_eq!(confidence_tier(60.0), ConfidenceTier::Warning);
        assert_eq!(confidence_tier(59.99), ConfidenceTier::Bad);
        assert_eq!(confidence_tier(0.0), ConfidenceTier::Bad);
    }

    #[test]
    fn bar_fraction_is_not_clamped() {
        let view = prediction_results(&response("A", 50.0, &[("A", 120.0), ("B", 50.0)]));
        assert!((view.bars[0].fraction - 1.2).abs() < 1e-6);
        assert!((view.bars[1].fraction - 0.5).abs() < 1e-6);
    }
}
