use crate::domain::entities::Absence;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only view over the absence-request subsystem
#[async_trait]
pub trait AbsenceRepository: Send + Sync {
    /// Absences of the employee overlapping the range, any status
    async fn absences_overlapping(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<Absence>>;
}
