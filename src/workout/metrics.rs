use serde::{Deserialize, Serialize};

use super::MetricField;

/// Fully validated form values, serialized as the prediction request body.
///
/// Field order and renames match the feature order of the prediction service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutMetrics {
    #[serde(rename = "Calories_Burned")]
    pub calories_burned: f64,
    #[serde(rename = "cal_balance")]
    pub calorie_balance: f64,
    #[serde(rename = "Session_Duration (hours)")]
    pub session_duration_hours: f64,
    #[serde(rename = "expected_burn")]
    pub expected_burn: f64,
    #[serde(rename = "Experience_Level")]
    pub experience_level: f64,
    #[serde(rename = "Weight (kg)")]
    pub weight_kg: f64,
    #[serde(rename = "Calories")]
    pub calories: f64,
    #[serde(rename = "Workout_Frequency (days/week)")]
    pub workout_frequency_days_per_week: f64,
    #[serde(rename = "lean_mass_kg")]
    pub lean_mass_kg: f64,
    #[serde(rename = "Water_Intake (liters)")]
    pub water_intake_liters: f64,
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "BMI_calc")]
    pub bmi_calculated: f64,
    #[serde(rename = "protein_per_kg")]
    pub protein_per_kg: f64,
    #[serde(rename = "Burns Calories (per 30 min)_bc")]
    pub burns_per_30_min_bc: f64,
    #[serde(rename = "Burns Calories (per 30 min)")]
    pub burns_per_30_min: f64,
    #[serde(rename = "cook_time_min")]
    pub cook_time_min: f64,
    #[serde(rename = "cholesterol_mg")]
    pub cholesterol_mg: f64,
    #[serde(rename = "sodium_mg")]
    pub sodium_mg: f64,
    #[serde(rename = "Fat_Percentage")]
    pub fat_percentage: f64,
    #[serde(rename = "serving_size_g")]
    pub serving_size_g: f64,
}

impl WorkoutMetrics {
    /// Build a record by asking `value_of` for every field.
    pub fn from_fn(mut value_of: impl FnMut(MetricField) -> f64) -> Self {
        let mut metrics = Self::default();
        for field in MetricField::ALL {
            *metrics.value_mut(field) = value_of(field);
        }
        metrics
    }

    pub fn get(&self, field: MetricField) -> f64 {
        match field {
            MetricField::CaloriesBurned => self.calories_burned,
            MetricField::CalorieBalance => self.calorie_balance,
            MetricField::SessionDuration => self.session_duration_hours,
            MetricField::ExpectedBurn => self.expected_burn,
            MetricField::ExperienceLevel => self.experience_level,
            MetricField::Weight => self.weight_kg,
            MetricField::Calories => self.calories,
            MetricField::WorkoutFrequency => self.workout_frequency_days_per_week,
            MetricField::LeanMass => self.lean_mass_kg,
            MetricField::WaterIntake => self.water_intake_liters,
            MetricField::Bmi => self.bmi,
            MetricField::BmiCalculated => self.bmi_calculated,
            MetricField::ProteinPerKg => self.protein_per_kg,
            MetricField::BurnsPer30MinBc => self.burns_per_30_min_bc,
            MetricField::BurnsPer30Min => self.burns_per_30_min,
            MetricField::CookTime => self.cook_time_min,
            MetricField::Cholesterol => self.cholesterol_mg,
            MetricField::Sodium => self.sodium_mg,
            MetricField::FatPercentage => self.fat_percentage,
            MetricField::ServingSize => self.serving_size_g,
        }
    }

    fn value_mut(&mut self, field: MetricField) -> &mut f64 {
        match field {
            MetricField::CaloriesBurned => &mut self.calories_burned,
            MetricField::CalorieBalance => &mut self.calorie_balance,
            MetricField::SessionDuration => &mut self.session_duration_hours,
            MetricField::ExpectedBurn => &mut self.expected_burn,
            MetricField::ExperienceLevel => &mut self.experience_level,
            MetricField::Weight => &mut self.weight_kg,
            MetricField::Calories => &mut self.calories,
            MetricField::WorkoutFrequency => &mut self.workout_frequency_days_per_week,
            MetricField::LeanMass => &mut self.lean_mass_kg,
            MetricField::WaterIntake => &mut self.water_intake_liters,
            MetricField::Bmi => &mut self.bmi,
            MetricField::BmiCalculated => &mut self.bmi_calculated,
            MetricField::ProteinPerKg => &mut self.protein_per_kg,
            MetricField::BurnsPer30MinBc => &mut self.burns_per_30_min_bc,
            MetricField::BurnsPer30Min => &mut self.burns_per_30_min,
            MetricField::CookTime => &mut self.cook_time_min,
            MetricField::Cholesterol => &mut self.cholesterol_mg,
            MetricField::Sodium => &mut self.sodium_mg,
            MetricField::FatPercentage => &mut self.fat_percentage,
            MetricField::ServingSize => &mut self.serving_size_g,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_service_keys_in_feature_order() {
        let metrics = WorkoutMetrics::from_fn(|field| field.index() as f64);
        let value = serde_json::to_value(metrics).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), MetricField::COUNT);
        for field in MetricField::ALL {
            let entry = object.get(field.key()).unwrap_or_else(|| panic!("{}", field.key()));
            assert_eq!(entry.as_f64(), Some(field.index() as f64));
        }

        let text = serde_json::to_string(&metrics).unwrap();
        let positions: Vec<_> = MetricField::ALL
            .iter()
            .map(|field| text.find(&format!("\"{}\":", field.key())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn get_reads_back_from_fn_values() {
        let metrics = WorkoutMetrics::from_fn(|field| field.index() as f64 * 1.5);
        assert_eq!(metrics.get(MetricField::ExperienceLevel), 6.0);
        assert_eq!(metrics.get(MetricField::ServingSize), 28.5);
    }
}
