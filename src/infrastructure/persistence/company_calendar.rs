use super::{date_to_db, entry_from_row, timestamp_to_db, Database};
use crate::domain::entities::DayEntry;
use crate::domain::errors::DomainResult;
use crate::domain::ports::company_calendar_repository::CompanyCalendarRepository;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

#[async_trait]
impl CompanyCalendarRepository for Database {
    async fn upsert_company_day(&self, entry: &DayEntry) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO company_calendar (date, kind, label, is_laborable, scope, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(date) DO UPDATE SET
                kind = excluded.kind,
                label = excluded.label,
                is_laborable = excluded.is_laborable,
                scope = excluded.scope,
                updated_at = excluded.updated_at",
        )
        .bind(date_to_db(entry.date))
        .bind(entry.kind.as_str().to_string())
        .bind(entry.label.clone())
        .bind(entry.is_laborable as i64)
        .bind(entry.scope.clone())
        .bind(timestamp_to_db(Utc::now()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_company_day(&self, date: NaiveDate) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM company_calendar WHERE date = ?")
            .bind(date_to_db(date))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_company_days_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<DayEntry>> {
        let rows = sqlx::query(
            "SELECT date, kind, label, is_laborable, scope
             FROM company_calendar
             WHERE date >= ? AND date <= ?
             ORDER BY date ASC",
        )
        .bind(date_to_db(from))
        .bind(date_to_db(to))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }
}
