use super::{MetricField, ValidationErrors, WorkoutMetrics, validation};

/// Raw text typed into each form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    values: [String; MetricField::COUNT],
}

impl FormFields {
    pub fn get(&self, field: MetricField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: MetricField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// True when no input holds any text.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}

/// Input values plus the inline errors currently shown for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkoutForm {
    fields: FormFields,
    errors: ValidationErrors,
}

impl WorkoutForm {
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Store raw input for `field`, clearing only that field's error.
    pub fn update_field(&mut self, field: MetricField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.errors.clear_field(field);
    }

    /// Compute the full error set without changing what is displayed.
    pub fn validate(&self) -> ValidationErrors {
        validation::validate(&self.fields)
    }

    /// Validate and convert the form.
    ///
    /// On failure the errors are kept for display and `None` is returned.
    pub fn submit(&mut self) -> Option<WorkoutMetrics> {
        match validation::to_metrics(&self.fields) {
            Ok(metrics) => {
                self.errors.clear();
                Some(metrics)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Empty every input and drop all errors.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors.clear();
    }

    /// Step a field's numeric value by `delta`, keeping two decimals.
    ///
    /// Blank or unparseable input starts from zero.
    pub fn nudge_field(&mut self, field: MetricField, delta: f64) {
        let current = validation::parse_metric(self.fields.get(field)).unwrap_or(0.0);
        self.update_field(field, format_step(current + delta));
    }
}

fn format_step(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::FieldError;

    fn valid_form() -> WorkoutForm {
        let mut form = WorkoutForm::default();
        for field in MetricField::ALL {
            form.update_field(field, "12.5");
        }
        form.update_field(MetricField::ExperienceLevel, "3");
        form
    }

    #[test]
    fn submit_with_missing_field_stores_errors() {
        let mut form = valid_form();
        form.update_field(MetricField::Sodium, "");
        assert!(form.submit().is_none());
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.errors().get(MetricField::Sodium), Some(FieldError::Required));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = WorkoutForm::default();
        assert!(form.submit().is_none());
        assert_eq!(form.errors().len(), MetricField::COUNT);

        form.update_field(MetricField::Bmi, "x");
        assert_eq!(form.errors().get(MetricField::Bmi), None);
        assert_eq!(form.errors().len(), MetricField::COUNT - 1);
        assert_eq!(form.errors().get(MetricField::Weight), Some(FieldError::Required));
    }

    #[test]
    fn validate_does_not_touch_displayed_errors() {
        let form = WorkoutForm::default();
        assert_eq!(form.validate().len(), MetricField::COUNT);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn successful_submit_returns_numeric_record() {
        let mut form = valid_form();
        let metrics = form.submit().unwrap();
        assert_eq!(metrics.get(MetricField::ExperienceLevel), 3.0);
        assert_eq!(metrics.get(MetricField::WaterIntake), 12.5);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = valid_form();
        form.update_field(MetricField::Calories, "abc");
        assert!(form.submit().is_none());
        form.reset();
        assert!(form.fields().is_blank());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn nudge_steps_from_current_value() {
        let mut form = WorkoutForm::default();
        form.nudge_field(MetricField::WorkoutFrequency, 1.0);
        assert_eq!(form.fields().get(MetricField::WorkoutFrequency), "1");
        form.update_field(MetricField::WaterIntake, "2.5");
        form.nudge_field(MetricField::WaterIntake, -0.1);
        assert_eq!(form.fields().get(MetricField::WaterIntake), "2.4");
    }
}
