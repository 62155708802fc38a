//! Macro-nutrient gram targets

use crate::energy::MacroRatio;
use serde::{Deserialize, Serialize};

/// Energy density of carbohydrate (kcal/g)
pub const KCAL_PER_G_CARB: f64 = 4.0;
/// Energy density of protein (kcal/g)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy density of fat (kcal/g)
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub kcal: f64,
    pub carb_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl Target {
    /// Calories reconstructed from the gram targets
    pub fn kcal_from_macros(&self) -> f64 {
        self.carb_g * KCAL_PER_G_CARB
            + self.protein_g * KCAL_PER_G_PROTEIN
            + self.fat_g * KCAL_PER_G_FAT
    }
}

/// Convert a calorie target and macro split into gram targets
pub fn translate_macros(kcal: f64, ratio: &MacroRatio) -> Target {
    Target {
        kcal,
        carb_g: kcal * ratio.carb / KCAL_PER_G_CARB,
        protein_g: kcal * ratio.protein / KCAL_PER_G_PROTEIN,
        fat_g: kcal * ratio.fat / KCAL_PER_G_FAT,
    }
}
