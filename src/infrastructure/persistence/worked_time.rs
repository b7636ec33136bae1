use super::{date_to_db, optional_text, Database};
use crate::domain::entities::{aggregate_worked_minutes, ClockEntry, WorkedTimeMarker};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::worked_time_repository::WorkedTimeRepository;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::Row;

#[async_trait]
impl WorkedTimeRepository for Database {
    async fn worked_time_between(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<WorkedTimeMarker>> {
        // clock_in is "YYYY-MM-DDTHH:MM:SS", so its date prefix compares as text
        let rows = sqlx::query(
            "SELECT employee_id, clock_in, clock_out
             FROM clock_entries
             WHERE employee_id = ? AND substr(clock_in, 1, 10) >= ? AND substr(clock_in, 1, 10) <= ?
             ORDER BY clock_in ASC",
        )
        .bind(employee_id.to_string())
        .bind(date_to_db(from))
        .bind(date_to_db(to))
        .fetch_all(&self.pool)
        .await?;

        let entries = rows
            .iter()
            .map(|row| -> DomainResult<ClockEntry> {
                Ok(ClockEntry {
                    employee_id: row.try_get("employee_id")?,
                    clock_in: datetime_from_db(&row.try_get::<String, _>("clock_in")?)?,
                    clock_out: optional_text(row, "clock_out")
                        .as_deref()
                        .map(datetime_from_db)
                        .transpose()?,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(aggregate_worked_minutes(&entries))
    }
}

fn datetime_from_db(value: &str) -> DomainResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| DomainError::Storage(format!("Invalid clock timestamp '{}': {}", value, e)))
}
