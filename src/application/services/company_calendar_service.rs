use crate::domain::entities::DayEntry;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::company_calendar_repository::CompanyCalendarRepository;
use crate::domain::services::day_resolver;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Manually entered company calendar rows
#[derive(Clone)]
pub struct CompanyCalendarService {
    repo: Arc<dyn CompanyCalendarRepository>,
}

impl CompanyCalendarService {
    pub fn new(repo: Arc<dyn CompanyCalendarRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, from: NaiveDate, to: NaiveDate) -> DomainResult<Vec<DayEntry>> {
        day_resolver::validate_range(from, to)?;
        self.repo.list_company_days_between(from, to).await
    }

    /// Create or replace the row for the entry's date
    pub async fn upsert(&self, entry: DayEntry) -> DomainResult<DayEntry> {
        self.repo.upsert_company_day(&entry).await?;
        info!("Company calendar day {} set to {}", entry.date, entry.kind);
        Ok(entry)
    }

    pub async fn remove(&self, date: NaiveDate) -> DomainResult<()> {
        if !self.repo.delete_company_day(date).await? {
            return Err(DomainError::NotFound(format!("No company calendar day on {}", date)));
        }
        info!("Company calendar day {} removed", date);
        Ok(())
    }
}
