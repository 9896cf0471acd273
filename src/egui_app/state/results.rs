use egui::Color32;

/// Color band for the confidence badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// 80% and above.
    Good,
    /// From 60% up to 80%.
    Warning,
    /// Below 60%.
    Bad,
}

/// One row of the probability chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityBarView {
    /// Workout label.
    pub label: String,
    /// Percentage as sent by the service.
    pub percent: f64,
    /// Bar width relative to the track; not clamped.
    pub fraction: f32,
    /// Percentage text, two decimals.
    pub value_text: String,
    /// Whether this row is the predicted label.
    pub is_predicted: bool,
    /// Bar fill color.
    pub color: Color32,
}

/// Everything the results panel needs to draw a prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResultsView {
    /// Predicted workout type.
    pub workout_type: String,
    /// Confidence text, two decimals with a percent sign.
    pub confidence_text: String,
    /// Badge tier for the confidence value.
    pub confidence_tier: ConfidenceTier,
    /// Badge background color.
    pub confidence_color: Color32,
    /// Rows ordered by descending probability.
    pub bars: Vec<ProbabilityBarView>,
}
