//! Added-sugar limit advisor
//!
//! Daily limits follow WHO-style guidance: 36 g for men, 25 g for women,
//! 20 g for minors and 15 g for people with diabetes. Sugar eaten during
//! the day is kept in a [`SugarLog`] of per-food records.

use crate::anthropometrics::BiologicalSex;
use crate::energy::Condition;
use crate::errors::{CoreError, CoreResult};
use crate::plan::Profile;
use crate::validation::{validate_food_name, validate_nutrient_amount};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DIABETIC_LIMIT_G: f64 = 15.0;
pub const MINOR_LIMIT_G: f64 = 20.0;
pub const MALE_LIMIT_G: f64 = 36.0;
pub const FEMALE_LIMIT_G: f64 = 25.0;

/// Age below which the minor limit applies
pub const ADULT_AGE_YEARS: u32 = 18;

/// Who the limit is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SugarProfile {
    pub age_years: u32,
    pub sex: BiologicalSex,
    #[serde(default)]
    pub diabetic: bool,
}

impl SugarProfile {
    /// Recommended maximum added sugar in grams per day
    pub fn daily_limit_g(&self) -> f64 {
        if self.diabetic {
            DIABETIC_LIMIT_G
        } else if self.age_years < ADULT_AGE_YEARS {
            MINOR_LIMIT_G
        } else {
            match self.sex {
                BiologicalSex::Male => MALE_LIMIT_G,
                BiologicalSex::Female => FEMALE_LIMIT_G,
            }
        }
    }

    /// Compare a day's sugar total with the limit
    pub fn check(&self, total_g: f64) -> CoreResult<SugarCheck> {
        validate_nutrient_amount(total_g).map_err(|m| CoreError::invalid_field("total_sugar_g", m))?;

        let limit_g = self.daily_limit_g();
        Ok(SugarCheck {
            limit_g,
            total_g,
            within_limit: total_g <= limit_g,
            excess_g: (total_g - limit_g).max(0.0),
            progress: (total_g / limit_g).min(1.0),
        })
    }
}

impl From<&Profile> for SugarProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            age_years: profile.age_years,
            sex: profile.sex,
            diabetic: profile.condition == Condition::Diabetes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SugarCheck {
    pub limit_g: f64,
    pub total_g: f64,
    pub within_limit: bool,
    pub excess_g: f64,
    /// Fraction of the limit consumed, capped at 1.0
    pub progress: f64,
}

/// One food eaten `quantity` times, with its sugar per unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SugarRecord {
    pub date: NaiveDate,
    pub food: String,
    pub quantity: u32,
    pub sugar_per_unit_g: f64,
    pub total_g: f64,
}

impl SugarRecord {
    pub fn new(
        food: &str,
        quantity: u32,
        sugar_per_unit_g: f64,
        date: NaiveDate,
    ) -> CoreResult<Self> {
        validate_food_name(food).map_err(|m| CoreError::invalid_field("food", m))?;
        if quantity == 0 {
            return Err(CoreError::invalid_field("quantity", "must be at least 1"));
        }
        validate_nutrient_amount(sugar_per_unit_g)
            .map_err(|m| CoreError::invalid_field("sugar_per_unit_g", m))?;

        let total_g = sugar_per_unit_g * f64::from(quantity);
        if !total_g.is_finite() {
            return Err(CoreError::invalid_field(
                "sugar_per_unit_g",
                "is too large for this quantity",
            ));
        }

        Ok(Self {
            date,
            food: food.trim().to_string(),
            quantity,
            sugar_per_unit_g,
            total_g,
        })
    }
}

/// Append-only list of sugar records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SugarLog {
    records: Vec<SugarRecord>,
}

impl SugarLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: SugarRecord) {
        self.records.push(record);
    }

    pub fn records_on(&self, date: NaiveDate) -> impl Iterator<Item = &SugarRecord> {
        self.records.iter().filter(move |r| r.date == date)
    }

    /// Sugar eaten on `date`, in grams
    pub fn total_g(&self, date: NaiveDate) -> f64 {
        self.records_on(date).map(|r| r.total_g).sum()
    }
}
