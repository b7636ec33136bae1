use crate::{
    domain::entities::DayEntry,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

pub async fn list_company_days(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> ApiResult<Json<Vec<DayEntry>>> {
    let days = state
        .company_calendar_service
        .list(query.from, query.to)
        .await?;
    Ok(Json(days))
}

/// PUT /api/company-calendar - Create or replace the row for a date
pub async fn upsert_company_day(
    State(state): State<AppState>,
    Json(entry): Json<DayEntry>,
) -> ApiResult<Json<DayEntry>> {
    let entry = state.company_calendar_service.upsert(entry).await?;
    Ok(Json(entry))
}

pub async fn delete_company_day(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> ApiResult<StatusCode> {
    state.company_calendar_service.remove(date).await?;
    Ok(StatusCode::NO_CONTENT)
}
