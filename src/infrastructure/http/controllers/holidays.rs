use crate::{
    domain::entities::{DayEntry, EnsureYearOutcome},
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct SyncQuery {
    #[serde(default)]
    pub force: bool,
}

/// GET /api/holidays?year= - Cached holidays of a year
pub async fn list_holidays(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> ApiResult<Json<Vec<DayEntry>>> {
    let holidays = state.holiday_service.list_year(query.year).await?;
    Ok(Json(holidays))
}

/// POST /api/holidays/:year/sync - Fetch the year unless cached, or always with `force=true`
pub async fn sync_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(query): Query<SyncQuery>,
) -> ApiResult<Json<EnsureYearOutcome>> {
    let outcome = if query.force {
        state.holiday_service.refresh_year(year).await?
    } else {
        state.holiday_service.ensure_year(year).await?
    };
    Ok(Json(outcome))
}
