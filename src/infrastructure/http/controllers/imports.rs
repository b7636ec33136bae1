use crate::{
    domain::entities::*,
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub a: String,
    pub b: String,
}

/// POST /api/imports/preview - Parse OCR text, store nothing
pub async fn preview_import(
    State(state): State<AppState>,
    Json(request): Json<PreviewImportRequest>,
) -> ApiResult<Json<ImportPreview>> {
    Ok(Json(state.import_service.preview(&request.text)))
}

/// POST /api/imports - Confirm reviewed entries as a new import
pub async fn create_import(
    State(state): State<AppState>,
    Json(request): Json<ConfirmImportRequest>,
) -> ApiResult<(StatusCode, Json<CalendarImport>)> {
    let import = state
        .import_service
        .save(request.entries, request.origin)
        .await?;
    Ok((StatusCode::CREATED, Json(import)))
}

pub async fn list_imports(State(state): State<AppState>) -> ApiResult<Json<Vec<ImportSummary>>> {
    let imports = state.import_service.list().await?;
    Ok(Json(imports))
}

pub async fn get_import(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CalendarImport>> {
    let import = state.import_service.get(&id).await?;
    Ok(Json(import))
}

/// POST /api/imports/:id/revert - Idempotent; returns the import with `reverted_at` set
pub async fn revert_import(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CalendarImport>> {
    let import = state.import_service.revert(&id).await?;
    Ok(Json(import))
}

/// GET /api/imports/compare?a=&b= - Date-by-date diff of import A against import B
pub async fn compare_imports(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> ApiResult<Json<Vec<DiffRow>>> {
    let rows = state.import_service.compare(&query.a, &query.b).await?;
    Ok(Json(rows))
}
