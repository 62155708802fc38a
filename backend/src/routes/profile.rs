//! Profile and nutrition plan API routes

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use nutrition_coach_shared::types::PlanResponse;
use nutrition_coach_shared::{NutritionPlan, Profile};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", put(update_profile))
        .route("/plan", get(get_plan))
}

/// PUT /api/v1/profile - Store the profile and return its plan
async fn update_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<PlanResponse>, ApiError> {
    let mut session = state.session().write().await;
    let plan = session.set_profile(profile)?.clone();

    Ok(Json(PlanResponse { profile, plan }))
}

/// GET /api/v1/profile/plan - Plan for the stored profile
async fn get_plan(State(state): State<AppState>) -> Result<Json<PlanResponse>, ApiError> {
    let session = state.session().read().await;
    match (session.profile(), session.plan()) {
        (Some(profile), Some(plan)) => Ok(Json(PlanResponse {
            profile: *profile,
            plan: plan.clone(),
        })),
        _ => Err(ApiError::NotFound("No profile has been set".to_string())),
    }
}

/// POST /api/v1/plan - Compute a plan without storing anything
pub async fn compute_plan(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<Json<PlanResponse>, ApiError> {
    let plan = NutritionPlan::compute(&profile, &state.config().nutrition.policy())?;
    Ok(Json(PlanResponse { profile, plan }))
}
