use crate::application::services::holiday_cache_service::HolidayCacheService;
use crate::domain::entities::ResolvedDay;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::absence_repository::AbsenceRepository;
use crate::domain::ports::company_calendar_repository::CompanyCalendarRepository;
use crate::domain::ports::import_repository::ImportRepository;
use crate::domain::ports::worked_time_repository::WorkedTimeRepository;
use crate::domain::services::day_resolver::{self, ResolutionInputs};
use chrono::{Datelike, NaiveDate};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers "what is the state of day D for employee E" queries
#[derive(Clone)]
pub struct CalendarService {
    holidays: HolidayCacheService,
    import_repo: Arc<dyn ImportRepository>,
    company_repo: Arc<dyn CompanyCalendarRepository>,
    absence_repo: Arc<dyn AbsenceRepository>,
    worked_time_repo: Arc<dyn WorkedTimeRepository>,
}

impl CalendarService {
    pub fn new(
        holidays: HolidayCacheService,
        import_repo: Arc<dyn ImportRepository>,
        company_repo: Arc<dyn CompanyCalendarRepository>,
        absence_repo: Arc<dyn AbsenceRepository>,
        worked_time_repo: Arc<dyn WorkedTimeRepository>,
    ) -> Self {
        Self {
            holidays,
            import_repo,
            company_repo,
            absence_repo,
            worked_time_repo,
        }
    }

    /// Resolved state of every date in `[from, to]` for one employee
    pub async fn resolve(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
        region: Option<&str>,
    ) -> DomainResult<Vec<ResolvedDay>> {
        self.resolve_many(&[employee_id.to_string()], from, to, region)
            .await
    }

    /// Same as `resolve` for several employees; company and holiday inputs
    /// are loaded once. Days are grouped by employee, in the given order.
    pub async fn resolve_many(
        &self,
        employee_ids: &[String],
        from: NaiveDate,
        to: NaiveDate,
        region: Option<&str>,
    ) -> DomainResult<Vec<ResolvedDay>> {
        day_resolver::validate_range(from, to)?;
        if employee_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(DomainError::Validation("Employee id cannot be empty".to_string()));
        }

        let shared = self.shared_inputs(from, to, region).await?;

        let mut days = Vec::new();
        for employee_id in employee_ids {
            let absences = self
                .absence_repo
                .absences_overlapping(employee_id, from, to)
                .await?;
            let worked = self
                .worked_time_repo
                .worked_time_between(employee_id, from, to)
                .await?;

            let inputs = shared
                .clone()
                .with_absences(absences)
                .with_worked_time(worked);

            days.extend(day_resolver::resolve_range(employee_id, from, to, &inputs)?);
        }

        metrics::counter!("calendar_days_resolved_total").increment(days.len() as u64);
        debug!(
            "Resolved {} days for {} employees between {} and {}",
            days.len(),
            employee_ids.len(),
            from,
            to
        );

        Ok(days)
    }

    /// Company overrides and external holidays, common to every employee
    async fn shared_inputs(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        region: Option<&str>,
    ) -> DomainResult<ResolutionInputs> {
        // Holiday sync is best effort: a failing provider only means no
        // external holidays are known for that year. Years sync concurrently.
        let syncs = (from.year()..=to.year()).map(|year| async move {
            (year, self.holidays.ensure_year(year).await)
        });
        for (year, result) in join_all(syncs).await {
            if let Err(e) = result {
                warn!("Resolving without external holidays for {}: {}", year, e);
            }
        }

        let holidays = self.holidays.holidays_between(from, to).await?;
        let import_entries = self.import_repo.active_entries_between(from, to).await?;
        let manual_rows = self.company_repo.list_company_days_between(from, to).await?;

        Ok(ResolutionInputs::new()
            .with_company_days(import_entries, manual_rows)
            .with_holidays(holidays, region))
    }
}
