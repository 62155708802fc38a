//! Food catalog, food log and daily feedback API routes

use crate::error::{ApiError, ApiResult};
use crate::services::LogCsvService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use nutrition_coach_shared::types::{
    CatalogItemRequest, ClearDayResponse, DailySummaryResponse, DateQuery, DayEntriesResponse,
    FeedbackView, ImportResponse, LogFoodRequest, LoggedDatesResponse,
};
use nutrition_coach_shared::{CatalogItem, FoodEntry};
use tracing::warn;

/// Create nutrition routes
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(list_catalog).post(add_catalog_item))
        .route("/log", get(get_day_entries).post(log_food).delete(clear_day))
        .route("/daily", get(get_daily_summary))
        .route("/dates", get(list_logged_dates))
        .route("/export", get(export_log))
        .route("/import", post(import_log))
}

fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

/// GET /api/v1/nutrition/catalog - List catalog items
async fn list_catalog(State(state): State<AppState>) -> Json<Vec<CatalogItem>> {
    let session = state.session().read().await;
    Json(session.catalog().items().to_vec())
}

/// POST /api/v1/nutrition/catalog - Add a custom catalog item
async fn add_catalog_item(
    State(state): State<AppState>,
    Json(req): Json<CatalogItemRequest>,
) -> ApiResult<Json<CatalogItem>> {
    let mut session = state.session().write().await;
    session.add_catalog_item(req.clone())?;
    let item = session
        .catalog()
        .find(&req.name)
        .cloned()
        .unwrap_or(req);
    Ok(Json(item))
}

/// POST /api/v1/nutrition/log - Log a catalog food
async fn log_food(
    State(state): State<AppState>,
    Json(req): Json<LogFoodRequest>,
) -> ApiResult<Json<FoodEntry>> {
    let date = date_or_today(req.date);
    let mut session = state.session().write().await;
    let entry = session.log_food(&req.food_name, req.serving_multiplier, date)?;
    Ok(Json(entry))
}

/// GET /api/v1/nutrition/log - Entries for a date
async fn get_day_entries(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<DayEntriesResponse> {
    let date = date_or_today(query.date);
    let session = state.session().read().await;
    Json(DayEntriesResponse {
        date,
        entries: session.entries_on(date),
    })
}

/// DELETE /api/v1/nutrition/log - Remove every entry for a date
async fn clear_day(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<ClearDayResponse> {
    let date = date_or_today(query.date);
    let removed = state.session().write().await.clear_date(date);
    Json(ClearDayResponse { date, removed })
}

/// GET /api/v1/nutrition/daily - Totals and feedback for a date
async fn get_daily_summary(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<DailySummaryResponse> {
    let date = date_or_today(query.date);
    let session = state.session().read().await;

    Json(DailySummaryResponse {
        date,
        entries: session.entries_on(date),
        totals: session.totals(date),
        target: session.plan().map(|plan| plan.target),
        feedback: session.feedback(date).map(FeedbackView::from),
    })
}

/// GET /api/v1/nutrition/dates - Dates with at least one entry
async fn list_logged_dates(State(state): State<AppState>) -> Json<LoggedDatesResponse> {
    let session = state.session().read().await;
    Json(LoggedDatesResponse {
        dates: session.logged_dates(),
    })
}

/// GET /api/v1/nutrition/export - Whole log as CSV
async fn export_log(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let csv = {
        let session = state.session().read().await;
        LogCsvService::export_csv(session.log().entries())?
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"food-log.csv\""),
    );

    Ok((headers, csv))
}

/// POST /api/v1/nutrition/import - Append entries from a CSV body
async fn import_log(State(state): State<AppState>, body: String) -> ApiResult<Json<ImportResponse>> {
    let entries = LogCsvService::parse_csv(&body).map_err(|e| {
        warn!(error = %e, "Food log import rejected");
        e
    })?;

    let mut session = state.session().write().await;
    let imported = session.import_entries(entries);
    Ok(Json(ImportResponse {
        imported,
        total_entries: session.log().len(),
    }))
}
