use crate::application::services::*;
use crate::config::Config;
use crate::domain::ports::absence_repository::AbsenceRepository;
use crate::domain::ports::company_calendar_repository::CompanyCalendarRepository;
use crate::domain::ports::holiday_repository::HolidayRepository;
use crate::domain::ports::holiday_source::HolidaySource;
use crate::domain::ports::import_repository::ImportRepository;
use crate::domain::ports::worked_time_repository::WorkedTimeRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use crate::infrastructure::providers::NagerHolidaySource;
use chrono::Datelike;
use std::sync::Arc;

pub async fn build_app_state(
    db: Database,
    config: &Config,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let source = Arc::new(NagerHolidaySource::new(
        config.holiday_provider_url.clone(),
        config.holiday_fetch_timeout,
    )?) as Arc<dyn HolidaySource>;
    let state = build_state_with_source(db, source, &config.holiday_country);
    tracing::info!(
        "Holiday provider {} configured for {}",
        config.holiday_provider_url,
        state.holiday_service.country()
    );

    if config.holiday_warmup {
        spawn_holiday_warmup(state.holiday_service.clone());
    }

    Ok(state)
}

/// Wire services over one database and an arbitrary holiday source
pub fn build_state_with_source(
    db: Database,
    source: Arc<dyn HolidaySource>,
    country: &str,
) -> AppState {
    let holiday_service = HolidayCacheService::new(
        Arc::new(db.clone()) as Arc<dyn HolidayRepository>,
        source,
        country,
    );

    let import_repo = Arc::new(db.clone()) as Arc<dyn ImportRepository>;
    let company_repo = Arc::new(db.clone()) as Arc<dyn CompanyCalendarRepository>;

    let calendar_service = CalendarService::new(
        holiday_service.clone(),
        import_repo.clone(),
        company_repo.clone(),
        Arc::new(db.clone()) as Arc<dyn AbsenceRepository>,
        Arc::new(db) as Arc<dyn WorkedTimeRepository>,
    );

    AppState {
        calendar_service,
        holiday_service,
        import_service: ImportService::new(import_repo),
        company_calendar_service: CompanyCalendarService::new(company_repo),
    }
}

/// Sync the current year in the background so the first query does not wait on the provider
fn spawn_holiday_warmup(holiday_service: HolidayCacheService) {
    let year = chrono::Local::now().year();
    tokio::spawn(async move {
        match holiday_service.ensure_year(year).await {
            Ok(outcome) if outcome.imported => {
                tracing::info!("Holiday warm-up stored {} holidays for {}", outcome.count, year)
            }
            Ok(_) => tracing::debug!("Holiday warm-up: {} already cached", year),
            Err(e) => tracing::warn!("Holiday warm-up for {} failed: {}", year, e),
        }
    });
}
