//! Food catalog
//!
//! Per-serving nutrition for common foods, extensible at runtime with
//! user-submitted items. Names are matched case-insensitively and the most
//! recently added item wins, so a custom item can shadow a built-in one.

use crate::errors::{CoreError, CoreResult};
use crate::intake::FoodEntry;
use crate::validation::{validate_food_name, validate_nutrient_amount, validate_serving_multiplier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nutrition for one nominal serving of a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub kcal: f64,
    pub carb_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, kcal: f64, carb_g: f64, protein_g: f64, fat_g: f64) -> Self {
        Self {
            name: name.into(),
            kcal,
            carb_g,
            protein_g,
            fat_g,
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        validate_food_name(&self.name).map_err(|m| CoreError::invalid_field("name", m))?;
        for (field, value) in [
            ("kcal", self.kcal),
            ("carb_g", self.carb_g),
            ("protein_g", self.protein_g),
            ("fat_g", self.fat_g),
        ] {
            validate_nutrient_amount(value).map_err(|m| CoreError::invalid_field(field, m))?;
        }
        Ok(())
    }

    /// Scale this item into a log entry
    pub fn to_entry(&self, multiplier: f64, date: NaiveDate) -> CoreResult<FoodEntry> {
        validate_serving_multiplier(multiplier)
            .map_err(|m| CoreError::invalid_field("serving_multiplier", m))?;

        let entry = FoodEntry {
            date,
            name: self.name.clone(),
            serving_multiplier: multiplier,
            kcal: self.kcal * multiplier,
            carb_g: self.carb_g * multiplier,
            protein_g: self.protein_g * multiplier,
            fat_g: self.fat_g * multiplier,
        };
        for (field, value) in [
            ("kcal", entry.kcal),
            ("carb_g", entry.carb_g),
            ("protein_g", entry.protein_g),
            ("fat_g", entry.fat_g),
        ] {
            if !value.is_finite() {
                return Err(CoreError::invalid_field(
                    field,
                    "is too large for this serving amount",
                ));
            }
        }
        Ok(entry)
    }
}

/// Built-in foods: (name, kcal, carb g, protein g, fat g) per serving
const BUILTIN_FOODS: &[(&str, f64, f64, f64, f64)] = &[
    ("Cooked rice (1 bowl)", 300.0, 65.0, 5.5, 0.6),
    ("Chicken breast (100g)", 165.0, 0.0, 31.0, 3.6),
    ("Egg (1 large)", 72.0, 0.4, 6.3, 4.8),
    ("Banana (1 medium)", 105.0, 27.0, 1.3, 0.4),
    ("Milk (200ml)", 130.0, 9.6, 6.6, 7.6),
    ("Salmon (100g)", 208.0, 0.0, 20.0, 13.0),
    ("Broccoli (100g)", 34.0, 6.6, 2.8, 0.4),
    ("Sweet potato (1 medium)", 112.0, 26.0, 2.0, 0.1),
    ("Tofu (100g)", 76.0, 1.9, 8.0, 4.8),
    ("Oatmeal (40g)", 150.0, 27.0, 5.0, 2.5),
    ("Apple (1 medium)", 95.0, 25.0, 0.5, 0.3),
    ("Whole wheat bread (1 slice)", 80.0, 14.0, 4.0, 1.0),
];

/// Food catalog with built-in and custom items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCatalog {
    items: Vec<CatalogItem>,
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl FoodCatalog {
    /// An empty catalog
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Catalog pre-filled with the built-in foods
    pub fn with_builtin() -> Self {
        let items = BUILTIN_FOODS
            .iter()
            .map(|&(name, kcal, carb, protein, fat)| CatalogItem::new(name, kcal, carb, protein, fat))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Add a user-submitted item after validating it
    pub fn add_custom(&mut self, mut item: CatalogItem) -> CoreResult<()> {
        item.validate()?;
        item.name = item.name.trim().to_string();
        self.items.push(item);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        let wanted = name.trim();
        self.items
            .iter()
            .rev()
            .find(|item| item.name.eq_ignore_ascii_case(wanted))
    }

    /// Look up `name` and scale it into a log entry
    pub fn entry(&self, name: &str, multiplier: f64, date: NaiveDate) -> CoreResult<FoodEntry> {
        let item = self
            .find(name)
            .ok_or_else(|| CoreError::NotFound(format!("Food '{}' is not in the catalog", name.trim())))?;
        item.to_entry(multiplier, date)
    }
}
