//! Nutrition Coach WASM Module
//!
//! WebAssembly bindings over the shared nutrition core so the browser can
//! preview targets and feedback without a round trip to the backend.

use nutrition_coach_shared::{
    anthropometrics, BiologicalSex, FeedbackBands, NutritionPlan, Profile, SugarProfile,
    TargetPolicy,
};
use wasm_bindgen::prelude::*;

fn sex_from_flag(is_male: bool) -> BiologicalSex {
    if is_male {
        BiologicalSex::Male
    } else {
        BiologicalSex::Female
    }
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    anthropometrics::calculate_bmi(weight_kg, height_cm)
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> f64 {
    anthropometrics::calculate_bmr(weight_kg, height_cm, age_years, sex_from_flag(is_male))
}

fn plan_json(profile_json: &str) -> Result<String, String> {
    let profile: Profile = serde_json::from_str(profile_json).map_err(|e| e.to_string())?;
    let plan = NutritionPlan::compute(&profile, &TargetPolicy::default()).map_err(|e| e.to_string())?;
    serde_json::to_string(&plan).map_err(|e| e.to_string())
}

/// Full plan for a profile given as JSON; returns the plan as JSON
#[wasm_bindgen]
pub fn calculate_plan(profile_json: &str) -> Result<String, JsError> {
    plan_json(profile_json).map_err(|msg| JsError::new(&msg))
}

/// Feedback status label (`deficient`, `on-target` or `excess`)
#[wasm_bindgen]
pub fn classify_intake(total_kcal: f64, target_kcal: f64) -> String {
    nutrition_coach_shared::classify_intake(total_kcal, target_kcal, &FeedbackBands::default())
        .status
        .label()
        .to_string()
}

/// Daily added-sugar limit in grams
#[wasm_bindgen]
pub fn sugar_limit_g(age_years: u32, is_male: bool, diabetic: bool) -> f64 {
    SugarProfile {
        age_years,
        sex: sex_from_flag(is_male),
        diabetic,
    }
    .daily_limit_g()
}
