//! Browser-side tests, run with `wasm-pack test --headless --chrome wasm`

#![cfg(target_arch = "wasm32")]

use nutrition_coach_wasm::{calculate_plan, classify_intake};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn plan_round_trips_through_json() {
    let profile = r#"{"sex":"female","age_years":30,"height_cm":165,"weight_kg":60,"activity_level":"sedentary"}"#;
    let plan: serde_json::Value = serde_json::from_str(&calculate_plan(profile).ok().unwrap()).unwrap();
    assert!((plan["bmr"].as_f64().unwrap() - 1320.25).abs() < 1e-9);
    assert!((plan["target"]["kcal"].as_f64().unwrap() - 1584.3).abs() < 1e-6);
}

#[wasm_bindgen_test]
fn invalid_profile_is_an_error() {
    assert!(calculate_plan(r#"{"sex":"female","age_years":30,"height_cm":0,"weight_kg":60}"#).is_err());
}

#[wasm_bindgen_test]
fn intake_label() {
    assert_eq!(classify_intake(1584.3, 1584.3), "on-target");
}
