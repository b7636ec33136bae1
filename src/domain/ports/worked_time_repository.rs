use crate::domain::entities::WorkedTimeMarker;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only view over the time-clock subsystem
#[async_trait]
pub trait WorkedTimeRepository: Send + Sync {
    async fn worked_time_between(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<WorkedTimeMarker>>;
}
