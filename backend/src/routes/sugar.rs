//! Sugar limit and sugar log API routes

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use nutrition_coach_shared::types::{
    DateQuery, LogSugarRequest, SugarCheckRequest, SugarDayResponse,
};
use nutrition_coach_shared::{SugarCheck, SugarRecord};

/// Create sugar routes
pub fn sugar_routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(check_sugar))
        .route("/log", get(get_sugar_day).post(log_sugar))
}

/// POST /api/v1/sugar/check - Compare a day's sugar with the personal limit
async fn check_sugar(Json(req): Json<SugarCheckRequest>) -> ApiResult<Json<SugarCheck>> {
    let check = req.profile.check(req.total_sugar_g)?;
    Ok(Json(check))
}

/// POST /api/v1/sugar/log - Record sugar eaten
async fn log_sugar(
    State(state): State<AppState>,
    Json(req): Json<LogSugarRequest>,
) -> ApiResult<Json<SugarRecord>> {
    let date = req.date.unwrap_or_else(|| Utc::now().date_naive());
    let mut session = state.session().write().await;
    let record = session.log_sugar(&req.food, req.quantity, req.sugar_per_unit_g, date)?;
    Ok(Json(record))
}

/// GET /api/v1/sugar/log - Records, total and limit check for a date
async fn get_sugar_day(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<SugarDayResponse>> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let session = state.session().read().await;

    Ok(Json(SugarDayResponse {
        date,
        records: session.sugar_records_on(date),
        total_g: session.sugar_total_g(date),
        check: session.sugar_check(date)?,
    }))
}
