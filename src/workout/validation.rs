use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::{FormFields, MetricField, WorkoutMetrics};

/// Accepted experience levels (beginner through advanced).
pub const EXPERIENCE_LEVEL_RANGE: RangeInclusive<f64> = 1.0..=3.0;

/// Why a single field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid number")]
    InvalidNumber,
    #[error("Experience level must be between 1 and 3")]
    ExperienceLevelOutOfRange,
}

/// Per-field validation failures; empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<MetricField, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: MetricField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: MetricField, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Drop the error for `field`, returning whether one was present.
    pub fn clear_field(&mut self, field: MetricField) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Failing fields in feature order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// First failing field in feature order.
    pub fn first(&self) -> Option<MetricField> {
        self.errors.keys().next().copied()
    }
}

/// Parse raw input as a finite number.
///
/// Surrounding whitespace is ignored; blank input is [`FieldError::Required`].
pub fn parse_metric(raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::InvalidNumber),
    }
}

fn check_field(field: MetricField, raw: &str) -> Result<f64, FieldError> {
    let value = parse_metric(raw)?;
    if field == MetricField::ExperienceLevel && !EXPERIENCE_LEVEL_RANGE.contains(&value) {
        return Err(FieldError::ExperienceLevelOutOfRange);
    }
    Ok(value)
}

/// Check every field, collecting all failures in one pass.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in MetricField::ALL {
        if let Err(error) = check_field(field, fields.get(field)) {
            errors.insert(field, error);
        }
    }
    errors
}

/// Convert raw input into a request record, or report every failing field.
pub fn to_metrics(fields: &FormFields) -> Result<WorkoutMetrics, ValidationErrors> {
    let errors = validate(fields);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(WorkoutMetrics::from_fn(|field| {
        check_field(field, fields.get(field)).unwrap_or_default()
    }))
}
