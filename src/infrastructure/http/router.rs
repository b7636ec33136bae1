use crate::infrastructure::http::controllers::{calendar, company_calendar, holidays, imports};
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Day resolution
        .route(
            "/api/employees/:employee_id/calendar",
            get(calendar::employee_calendar),
        )
        .route("/api/calendar/resolve", post(calendar::resolve_many))
        // Public holiday cache
        .route("/api/holidays", get(holidays::list_holidays))
        .route("/api/holidays/:year/sync", post(holidays::sync_year))
        // Manual company calendar
        .route(
            "/api/company-calendar",
            get(company_calendar::list_company_days).put(company_calendar::upsert_company_day),
        )
        .route(
            "/api/company-calendar/:date",
            delete(company_calendar::delete_company_day),
        )
        // OCR imports
        .route("/api/imports/preview", post(imports::preview_import))
        .route("/api/imports/compare", get(imports::compare_imports))
        .route(
            "/api/imports",
            get(imports::list_imports).post(imports::create_import),
        )
        .route("/api/imports/:id", get(imports::get_import))
        .route("/api/imports/:id/revert", post(imports::revert_import));

    Router::new()
        .route("/health", get(health_handler))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}
