//! API request and response types

use crate::catalog::CatalogItem;
use crate::feedback::{Feedback, FeedbackStatus};
use crate::intake::{FoodEntry, Totals};
use crate::macro_targets::Target;
use crate::plan::{NutritionPlan, Profile};
use crate::sugar::{SugarCheck, SugarProfile, SugarRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Profile and Plan
// ============================================================================

/// Plan computed for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub profile: Profile,
    pub plan: NutritionPlan,
}

// ============================================================================
// Food Log
// ============================================================================

fn default_serving_multiplier() -> f64 {
    1.0
}

/// Log a catalog food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFoodRequest {
    pub food_name: String,
    #[serde(default = "default_serving_multiplier")]
    pub serving_multiplier: f64,
    /// Defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Optional `?date=YYYY-MM-DD` query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Add a custom catalog item
pub type CatalogItemRequest = CatalogItem;

/// Feedback with a user-facing message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackView {
    pub pct: f64,
    pub status: FeedbackStatus,
    pub message: String,
}

impl From<Feedback> for FeedbackView {
    fn from(feedback: Feedback) -> Self {
        Self {
            pct: feedback.pct,
            status: feedback.status,
            message: feedback.status.message().to_string(),
        }
    }
}

/// Totals and feedback for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub entries: Vec<FoodEntry>,
    pub totals: Totals,
    /// Absent until a profile has been set
    pub target: Option<Target>,
    pub feedback: Option<FeedbackView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntriesResponse {
    pub date: NaiveDate,
    pub entries: Vec<FoodEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearDayResponse {
    pub date: NaiveDate,
    pub removed: usize,
}

/// Dates that have at least one logged entry, ascending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedDatesResponse {
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub total_entries: usize,
}

// ============================================================================
// Sugar
// ============================================================================

/// Sugar limit check request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SugarCheckRequest {
    #[serde(flatten)]
    pub profile: SugarProfile,
    pub total_sugar_g: f64,
}

fn default_quantity() -> u32 {
    1
}

/// Record sugar eaten; grams are entered per unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSugarRequest {
    pub food: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub sugar_per_unit_g: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Sugar records and total for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SugarDayResponse {
    pub date: NaiveDate,
    pub records: Vec<SugarRecord>,
    pub total_g: f64,
    /// Absent until a profile has been set
    pub check: Option<SugarCheck>,
}
