//! Energy target resolution
//!
//! Turns BMR into TDEE with the activity multiplier, then applies the
//! health-condition adjustment: a calorie factor, a macro split and a list
//! of advisory tips.

use crate::anthropometrics::ActivityLevel;
use crate::errors::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Default calorie factor applied for obesity
pub const DEFAULT_OBESITY_FACTOR: f64 = 0.85;

/// Health condition driving the calorie and macro adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    None,
    Diabetes,
    Hypertension,
    Obesity,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::None,
        Condition::Diabetes,
        Condition::Hypertension,
        Condition::Obesity,
    ];
}

/// Fractional split of the calorie target across macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub carb: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroRatio {
    /// 50% carbohydrate, 20% protein, 30% fat
    pub const DEFAULT: MacroRatio = MacroRatio {
        carb: 0.50,
        protein: 0.20,
        fat: 0.30,
    };

    pub const DIABETES: MacroRatio = MacroRatio {
        carb: 0.43,
        protein: 0.22,
        fat: 0.35,
    };

    pub const OBESITY: MacroRatio = MacroRatio {
        carb: 0.45,
        protein: 0.27,
        fat: 0.28,
    };

    pub fn sum(&self) -> f64 {
        self.carb + self.protein + self.fat
    }
}

/// Tunable constants of the target computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPolicy {
    /// Calorie factor for [`Condition::Obesity`], in (0, 1]
    pub obesity_factor: f64,
}

impl Default for TargetPolicy {
    fn default() -> Self {
        Self {
            obesity_factor: DEFAULT_OBESITY_FACTOR,
        }
    }
}

impl TargetPolicy {
    pub fn validate(&self) -> CoreResult<()> {
        let f = self.obesity_factor;
        if !f.is_finite() || f <= 0.0 || f > 1.0 {
            return Err(CoreError::InvalidInput(format!(
                "obesity factor must be in (0, 1], got {}",
                f
            )));
        }
        Ok(())
    }
}

/// What a condition does to the plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionAdjustment {
    pub kcal_factor: f64,
    pub ratio: MacroRatio,
    pub guidance: &'static [&'static str],
}

const GENERAL_TIPS: &[&str] = &[
    "Eat a variety of vegetables, fruits and whole grains every day.",
    "Spread protein across meals instead of one large serving.",
    "Prefer water over sugary drinks.",
];

const DIABETES_TIPS: &[&str] = &[
    "Choose low glycemic index carbohydrates such as whole grains and legumes.",
    "Keep carbohydrate portions consistent across meals.",
    "Limit added sugar and sweetened beverages.",
    "Pair carbohydrates with protein or fiber to slow glucose absorption.",
];

const HYPERTENSION_TIPS: &[&str] = &[
    "Keep sodium below 2,000 mg per day; watch soups, sauces and processed foods.",
    "Eat potassium-rich foods such as bananas, spinach and potatoes.",
    "Follow a DASH-style pattern rich in vegetables and low-fat dairy.",
];

const OBESITY_TIPS: &[&str] = &[
    "Aim for a moderate calorie deficit rather than crash dieting.",
    "Keep protein high to preserve muscle while losing weight.",
    "Combine the diet with at least 150 minutes of exercise per week.",
    "Favor high-volume, low-energy-density foods like vegetables.",
];

/// Total mapping from condition to its adjustment
pub fn condition_adjustment(condition: Condition, policy: &TargetPolicy) -> ConditionAdjustment {
    match condition {
        Condition::None => ConditionAdjustment {
            kcal_factor: 1.0,
            ratio: MacroRatio::DEFAULT,
            guidance: GENERAL_TIPS,
        },
        Condition::Diabetes => ConditionAdjustment {
            kcal_factor: 1.0,
            ratio: MacroRatio::DIABETES,
            guidance: DIABETES_TIPS,
        },
        Condition::Hypertension => ConditionAdjustment {
            kcal_factor: 1.0,
            ratio: MacroRatio::DEFAULT,
            guidance: HYPERTENSION_TIPS,
        },
        Condition::Obesity => ConditionAdjustment {
            kcal_factor: policy.obesity_factor,
            ratio: MacroRatio::OBESITY,
            guidance: OBESITY_TIPS,
        },
    }
}

/// Calorie target and macro split after activity and condition adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyTarget {
    pub tdee: f64,
    pub kcal: f64,
    pub ratio: MacroRatio,
    pub guidance: Vec<String>,
}

/// Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Resolve the daily calorie target for a BMR, activity level and condition
pub fn resolve_energy_target(
    bmr: f64,
    activity_level: ActivityLevel,
    condition: Condition,
    policy: &TargetPolicy,
) -> EnergyTarget {
    let tdee = calculate_tdee(bmr, activity_level);
    let adjustment = condition_adjustment(condition, policy);

    EnergyTarget {
        tdee,
        kcal: tdee * adjustment.kcal_factor,
        ratio: adjustment.ratio,
        guidance: adjustment.guidance.iter().map(|s| s.to_string()).collect(),
    }
}
