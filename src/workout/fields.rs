/// One numeric input collected by the prediction form.
///
/// Variants are declared in the order the prediction service expects its
/// features; [`MetricField::ALL`] follows the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricField {
    CaloriesBurned,
    CalorieBalance,
    SessionDuration,
    ExpectedBurn,
    ExperienceLevel,
    Weight,
    Calories,
    WorkoutFrequency,
    LeanMass,
    WaterIntake,
    Bmi,
    BmiCalculated,
    ProteinPerKg,
    BurnsPer30MinBc,
    BurnsPer30Min,
    CookTime,
    Cholesterol,
    Sodium,
    FatPercentage,
    ServingSize,
}

impl MetricField {
    /// Number of fields in the form.
    pub const COUNT: usize = 20;

    /// Every field in service feature order.
    pub const ALL: [MetricField; Self::COUNT] = [
        Self::CaloriesBurned,
        Self::CalorieBalance,
        Self::SessionDuration,
        Self::ExpectedBurn,
        Self::ExperienceLevel,
        Self::Weight,
        Self::Calories,
        Self::WorkoutFrequency,
        Self::LeanMass,
        Self::WaterIntake,
        Self::Bmi,
        Self::BmiCalculated,
        Self::ProteinPerKg,
        Self::BurnsPer30MinBc,
        Self::BurnsPer30Min,
        Self::CookTime,
        Self::Cholesterol,
        Self::Sodium,
        Self::FatPercentage,
        Self::ServingSize,
    ];

    /// Position of the field inside [`MetricField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// JSON key used in prediction requests.
    pub fn key(self) -> &'static str {
        match self {
            Self::CaloriesBurned => "Calories_Burned",
            Self::CalorieBalance => "cal_balance",
            Self::SessionDuration => "Session_Duration (hours)",
            Self::ExpectedBurn => "expected_burn",
            Self::ExperienceLevel => "Experience_Level",
            Self::Weight => "Weight (kg)",
            Self::Calories => "Calories",
            Self::WorkoutFrequency => "Workout_Frequency (days/week)",
            Self::LeanMass => "lean_mass_kg",
            Self::WaterIntake => "Water_Intake (liters)",
            Self::Bmi => "BMI",
            Self::BmiCalculated => "BMI_calc",
            Self::ProteinPerKg => "protein_per_kg",
            Self::BurnsPer30MinBc => "Burns Calories (per 30 min)_bc",
            Self::BurnsPer30Min => "Burns Calories (per 30 min)",
            Self::CookTime => "cook_time_min",
            Self::Cholesterol => "cholesterol_mg",
            Self::Sodium => "sodium_mg",
            Self::FatPercentage => "Fat_Percentage",
            Self::ServingSize => "serving_size_g",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::CaloriesBurned => "Calories Burned",
            Self::CalorieBalance => "Calorie Balance",
            Self::SessionDuration => "Session Duration (hours)",
            Self::ExpectedBurn => "Expected Burn",
            Self::ExperienceLevel => "Experience Level (1-3)",
            Self::Weight => "Weight (kg)",
            Self::Calories => "Daily Calories",
            Self::WorkoutFrequency => "Workout Frequency (days/week)",
            Self::LeanMass => "Lean Mass (kg)",
            Self::WaterIntake => "Water Intake (liters)",
            Self::Bmi => "BMI (Body Mass Index)",
            Self::BmiCalculated => "BMI (Calculated)",
            Self::ProteinPerKg => "Protein per kg (g/kg)",
            Self::BurnsPer30MinBc => "Calories Burned (per 30 min)_bc",
            Self::BurnsPer30Min => "Calories Burned (per 30 min)",
            Self::CookTime => "Cook Time (minutes)",
            Self::Cholesterol => "Cholesterol (mg)",
            Self::Sodium => "Sodium (mg)",
            Self::FatPercentage => "Fat Percentage (%)",
            Self::ServingSize => "Serving Size (g)",
        }
    }

    /// Example value shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::CaloriesBurned => "e.g., 500",
            Self::CalorieBalance => "e.g., 500",
            Self::SessionDuration => "e.g., 1.5",
            Self::ExpectedBurn => "e.g., 450",
            Self::ExperienceLevel => "1, 2 or 3",
            Self::Weight => "e.g., 70.5",
            Self::Calories => "e.g., 2000",
            Self::WorkoutFrequency => "e.g., 4",
            Self::LeanMass => "e.g., 60.0",
            Self::WaterIntake => "e.g., 2.5",
            Self::Bmi | Self::BmiCalculated => "e.g., 22.5",
            Self::ProteinPerKg => "e.g., 2.0",
            Self::BurnsPer30MinBc | Self::BurnsPer30Min => "e.g., 200",
            Self::CookTime => "e.g., 30",
            Self::Cholesterol => "e.g., 200",
            Self::Sodium => "e.g., 2300",
            Self::FatPercentage => "e.g., 15.0",
            Self::ServingSize => "e.g., 100",
        }
    }

    /// Extra guidance rendered under the input, if any.
    pub fn help_text(self) -> Option<&'static str> {
        match self {
            Self::ExperienceLevel => Some("1 = Beginner, 2 = Intermediate, 3 = Advanced"),
            Self::CalorieBalance => Some("Calories consumed - Calories burned"),
            _ => None,
        }
    }

    /// Form section that renders this field.
    pub fn section(self) -> FormSection {
        FormSection::ALL
            .into_iter()
            .find(|section| section.fields().contains(&self))
            .unwrap_or(FormSection::AdvancedMetrics)
    }
}

/// Visual grouping of the form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormSection {
    BasicInformation,
    WorkoutExercise,
    NutritionDiet,
    AdvancedMetrics,
}

impl FormSection {
    /// Sections in render order.
    pub const ALL: [FormSection; 4] = [
        Self::BasicInformation,
        Self::WorkoutExercise,
        Self::NutritionDiet,
        Self::AdvancedMetrics,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::BasicInformation => "Basic Information",
            Self::WorkoutExercise => "Workout & Exercise Data",
            Self::NutritionDiet => "Nutrition & Diet",
            Self::AdvancedMetrics => "Advanced Metrics",
        }
    }

    /// Fields rendered in this section, top to bottom.
    pub fn fields(self) -> &'static [MetricField] {
        use MetricField::*;
        match self {
            Self::BasicInformation => &[Weight, Bmi, BmiCalculated, FatPercentage, LeanMass],
            Self::WorkoutExercise => &[
                CaloriesBurned,
                SessionDuration,
                WorkoutFrequency,
                ExperienceLevel,
                BurnsPer30Min,
                BurnsPer30MinBc,
                ExpectedBurn,
            ],
            Self::NutritionDiet => &[
                Calories,
                ProteinPerKg,
                Cholesterol,
                Sodium,
                ServingSize,
                CookTime,
            ],
            Self::AdvancedMetrics => &[CalorieBalance, WaterIntake],
        }
    }
}
