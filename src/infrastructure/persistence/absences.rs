use super::{date_from_db, date_to_db, Database};
use crate::domain::entities::Absence;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::absence_repository::AbsenceRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;

#[async_trait]
impl AbsenceRepository for Database {
    async fn absences_overlapping(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<Absence>> {
        let rows = sqlx::query(
            "SELECT id, employee_id, absence_type, start_date, end_date, status
             FROM absences
             WHERE employee_id = ? AND start_date <= ? AND end_date >= ?
             ORDER BY start_date ASC",
        )
        .bind(employee_id.to_string())
        .bind(date_to_db(to))
        .bind(date_to_db(from))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DomainResult<Absence> {
                Ok(Absence {
                    id: row.try_get("id")?,
                    employee_id: row.try_get("employee_id")?,
                    absence_type: row
                        .try_get::<String, _>("absence_type")?
                        .parse()
                        .map_err(DomainError::Storage)?,
                    start_date: date_from_db(&row.try_get::<String, _>("start_date")?)?,
                    end_date: date_from_db(&row.try_get::<String, _>("end_date")?)?,
                    status: row
                        .try_get::<String, _>("status")?
                        .parse()
                        .map_err(DomainError::Storage)?,
                })
            })
            .collect()
    }
}
