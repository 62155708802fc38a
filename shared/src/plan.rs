//! Nutrition plan: the full target pipeline for one profile
//!
//! BMR → TDEE → condition-adjusted calories → macro grams.

use crate::anthropometrics::{
    calculate_bmi, calculate_bmr, classify_bmi, validate_body, ActivityLevel, BiologicalSex,
    BmiCategory,
};
use crate::energy::{resolve_energy_target, Condition, MacroRatio, TargetPolicy};
use crate::errors::{CoreError, CoreResult};
use crate::macro_targets::{translate_macros, Target};
use serde::{Deserialize, Serialize};

/// Profile data needed for the target computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub sex: BiologicalSex,
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub condition: Condition,
}

impl Profile {
    pub fn validate(&self) -> CoreResult<()> {
        validate_body(self.weight_kg, self.height_cm, self.age_years)
    }
}

/// Everything derived from a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub activity_multiplier: f64,
    pub tdee: f64,
    pub ratio: MacroRatio,
    pub target: Target,
    pub guidance: Vec<String>,
}

impl NutritionPlan {
    /// Validate the profile and run the pipeline
    pub fn compute(profile: &Profile, policy: &TargetPolicy) -> CoreResult<Self> {
        profile.validate()?;

        let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
        let bmr = calculate_bmr(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
        );
        if bmr <= 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "Measurements give a non-positive basal metabolic rate ({:.1} kcal)",
                bmr
            )));
        }
        let energy = resolve_energy_target(bmr, profile.activity_level, profile.condition, policy);
        let target = translate_macros(energy.kcal, &energy.ratio);

        Ok(Self {
            bmi,
            bmi_category: classify_bmi(bmi),
            bmr,
            activity_multiplier: profile.activity_level.multiplier(),
            tdee: energy.tdee,
            ratio: energy.ratio,
            target,
            guidance: energy.guidance,
        })
    }
}
