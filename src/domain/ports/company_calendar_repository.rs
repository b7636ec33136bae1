use crate::domain::entities::DayEntry;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Manually entered company calendar rows, one per date
#[async_trait]
pub trait CompanyCalendarRepository: Send + Sync {
    async fn upsert_company_day(&self, entry: &DayEntry) -> DomainResult<()>;
    async fn delete_company_day(&self, date: NaiveDate) -> DomainResult<bool>;
    async fn list_company_days_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<DayEntry>>;
}
