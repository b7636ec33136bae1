use crate::{
    domain::entities::ResolvedDay,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub employee_ids: Vec<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub region: Option<String>,
}

/// GET /api/employees/:employee_id/calendar - Resolved days for one employee
pub async fn employee_calendar(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> ApiResult<Json<Vec<ResolvedDay>>> {
    let days = state
        .calendar_service
        .resolve(&employee_id, query.from, query.to, query.region.as_deref())
        .await?;
    Ok(Json(days))
}

/// POST /api/calendar/resolve - Resolved days for several employees
pub async fn resolve_many(
    State(state): State<AppState>,
    Json(request): Json<ResolveRequest>,
) -> ApiResult<Json<Vec<ResolvedDay>>> {
    let days = state
        .calendar_service
        .resolve_many(
            &request.employee_ids,
            request.from,
            request.to,
            request.region.as_deref(),
        )
        .await?;
    Ok(Json(days))
}
