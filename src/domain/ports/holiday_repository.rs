use crate::domain::entities::{DayEntry, HolidayYear};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Durable per-year holiday cache
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    /// Cache marker for a year, if that year was already fetched
    async fn get_holiday_year(&self, country: &str, year: i32) -> DomainResult<Option<HolidayYear>>;

    /// Upsert holidays keyed by date and record the year marker, atomically.
    /// Rows for other dates are never removed.
    async fn store_holiday_year(
        &self,
        country: &str,
        year: i32,
        holidays: &[DayEntry],
    ) -> DomainResult<()>;

    /// Stored holidays between two dates (inclusive), sorted by date
    async fn list_holidays_between(
        &self,
        country: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<DayEntry>>;
}
