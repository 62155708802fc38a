//! Nutrition Coach Shared Library
//!
//! The pure nutrition core shared by the backend and the WASM module:
//! anthropometrics, energy and macro targets, the daily food log, intake
//! feedback, the food catalog and the sugar advisor, plus API types.

pub mod anthropometrics;
pub mod catalog;
pub mod energy;
pub mod errors;
pub mod feedback;
pub mod intake;
pub mod macro_targets;
pub mod plan;
pub mod sugar;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use anthropometrics::{ActivityLevel, BiologicalSex, BmiCategory};
pub use catalog::{CatalogItem, FoodCatalog};
pub use energy::{Condition, EnergyTarget, MacroRatio, TargetPolicy};
pub use errors::*;
pub use feedback::{classify_intake, Feedback, FeedbackBands, FeedbackStatus};
pub use intake::{DailyLog, FoodEntry, Totals};
pub use macro_targets::Target;
pub use plan::{NutritionPlan, Profile};
pub use sugar::{SugarCheck, SugarLog, SugarProfile, SugarRecord};
