//! Workout metrics collected by the prediction form.
//!
//! [`WorkoutForm`] owns the raw text of every [`MetricField`] together with the
//! inline errors shown next to them, and converts a valid form into the
//! [`WorkoutMetrics`] record sent to the prediction service.

mod fields;
mod form;
mod metrics;
mod validation;

pub use fields::{FormSection, MetricField};
pub use form::{FormFields, WorkoutForm};
pub use metrics::WorkoutMetrics;
pub use validation::{
    EXPERIENCE_LEVEL_RANGE, FieldError, ValidationErrors, parse_metric, to_metrics, validate,
};
