//! Input validation functions
//!
//! Validators return `Result<(), String>` with a short message; callers lift
//! them into [`CoreError`](crate::errors::CoreError) with the field label
//! attached.

/// Lightest body weight accepted (kg)
pub const MIN_WEIGHT_KG: f64 = 20.0;
/// Shortest height accepted (cm)
pub const MIN_HEIGHT_CM: f64 = 50.0;
/// Youngest age accepted (years)
pub const MIN_AGE_YEARS: u32 = 5;
/// Oldest age accepted (years)
pub const MAX_AGE_YEARS: u32 = 120;

/// Validate body weight (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if weight_kg < MIN_WEIGHT_KG {
        return Err(format!("must be at least {} kg", MIN_WEIGHT_KG));
    }
    if weight_kg > 500.0 {
        return Err("must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if height_cm < MIN_HEIGHT_CM {
        return Err(format!("must be at least {} cm", MIN_HEIGHT_CM));
    }
    if height_cm > 300.0 {
        return Err("must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(age_years: u32) -> Result<(), String> {
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age_years) {
        return Err(format!(
            "must be between {} and {} years",
            MIN_AGE_YEARS, MAX_AGE_YEARS
        ));
    }
    Ok(())
}

/// Validate a nutrient amount (kcal or grams); zero is allowed
pub fn validate_nutrient_amount(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if value < 0.0 {
        return Err("cannot be negative".to_string());
    }
    Ok(())
}

/// Validate a serving multiplier
pub fn validate_serving_multiplier(multiplier: f64) -> Result<(), String> {
    if multiplier.is_nan() || multiplier.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if multiplier <= 0.0 {
        return Err("must be greater than 0".to_string());
    }
    Ok(())
}

/// Validate a food name
pub fn validate_food_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("cannot be empty".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Weight",
        "height" | "height_cm" => "Height",
        "age" | "age_years" => "Age",
        "sex" => "Sex",
        "activity_level" => "Activity Level",
        "condition" => "Health Condition",
        "name" | "food_name" | "food" => "Food Name",
        "quantity" => "Quantity",
        "sugar_per_unit_g" => "Sugar per Unit",
        "amount" | "serving_multiplier" => "Serving Amount",
        "kcal" => "Calories",
        "carb_g" => "Carbohydrate",
        "protein_g" => "Protein",
        "fat_g" => "Fat",
        "date" => "Date",
        "total_sugar_g" => "Sugar Intake",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(65.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());
        assert!(validate_weight_kg(20.0).is_ok());
        assert!(validate_weight_kg(19.9).is_err());
        assert!(validate_weight_kg(0.0).is_err());
        assert!(validate_weight_kg(-3.0).is_err());
        assert!(validate_weight_kg(500.1).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(0.0).is_err());
        assert!(validate_height_cm(-10.0).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age_years() {
        assert!(validate_age_years(5).is_ok());
        assert!(validate_age_years(120).is_ok());
        assert!(validate_age_years(4).is_err());
        assert!(validate_age_years(121).is_err());
    }

    #[test]
    fn test_validate_nutrient_amount() {
        assert!(validate_nutrient_amount(0.0).is_ok());
        assert!(validate_nutrient_amount(250.5).is_ok());
        assert!(validate_nutrient_amount(-0.1).is_err());
        assert!(validate_nutrient_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_serving_multiplier() {
        assert!(validate_serving_multiplier(0.5).is_ok());
        assert!(validate_serving_multiplier(0.0).is_err());
        assert!(validate_serving_multiplier(-1.0).is_err());
    }

    #[test]
    fn test_validate_food_name() {
        assert!(validate_food_name("Rice").is_ok());
        assert!(validate_food_name("").is_err());
        assert!(validate_food_name("   ").is_err());
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::new("height_cm", "must be greater than 0 cm");
        assert_eq!(err.field, "height_cm");
        assert_eq!(err.display_label, "Height");
        assert_eq!(err.user_message(), "Height: must be greater than 0 cm");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_plausible_weight_accepted(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_non_positive_height_rejected(height in -500.0f64..=0.0) {
            prop_assert!(validate_height_cm(height).is_err(),
                "Height {} should be invalid", height);
        }
    }
}
