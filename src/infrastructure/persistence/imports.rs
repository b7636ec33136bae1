use super::{date_to_db, entry_from_row, optional_text, timestamp_from_db, timestamp_to_db, Database};
use crate::domain::entities::{CalendarImport, DayEntry, ImportSummary};
use crate::domain::errors::DomainResult;
use crate::domain::ports::import_repository::ImportRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;

#[async_trait]
impl ImportRepository for Database {
    async fn save_import(&self, import: &CalendarImport) -> DomainResult<()> {
        // Readers must never observe a half-written import
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO calendar_imports (id, origin, created_at, reverted_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(import.id.clone())
        .bind(import.origin.clone())
        .bind(timestamp_to_db(import.created_at))
        .bind(import.reverted_at.map(timestamp_to_db))
        .execute(&mut *tx)
        .await?;

        for entry in &import.entries {
            sqlx::query(
                "INSERT INTO calendar_import_entries (import_id, date, kind, label, is_laborable, scope)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(import.id.clone())
            .bind(date_to_db(entry.date))
            .bind(entry.kind.as_str().to_string())
            .bind(entry.label.clone())
            .bind(entry.is_laborable as i64)
            .bind(entry.scope.clone())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_import(&self, id: &str) -> DomainResult<Option<CalendarImport>> {
        let row = sqlx::query(
            "SELECT id, origin, created_at, reverted_at
             FROM calendar_imports
             WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let entry_rows = sqlx::query(
            "SELECT date, kind, label, is_laborable, scope
             FROM calendar_import_entries
             WHERE import_id = ?
             ORDER BY date ASC",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let entries = entry_rows
            .iter()
            .map(entry_from_row)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Some(CalendarImport {
            id: row.try_get("id")?,
            origin: row.try_get("origin")?,
            created_at: timestamp_from_db(&row.try_get::<String, _>("created_at")?)?,
            reverted_at: optional_timestamp(optional_text(&row, "reverted_at"))?,
            entries,
        }))
    }

    async fn list_imports(&self) -> DomainResult<Vec<ImportSummary>> {
        let rows = sqlx::query(
            "SELECT i.id, i.origin, i.created_at, i.reverted_at,
                    (SELECT COUNT(*) FROM calendar_import_entries e WHERE e.import_id = i.id) AS entry_count
             FROM calendar_imports i
             ORDER BY i.created_at DESC, i.id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DomainResult<ImportSummary> {
                Ok(ImportSummary {
                    id: row.try_get("id")?,
                    origin: row.try_get("origin")?,
                    created_at: timestamp_from_db(&row.try_get::<String, _>("created_at")?)?,
                    reverted_at: optional_timestamp(optional_text(row, "reverted_at"))?,
                    entry_count: row.try_get("entry_count")?,
                })
            })
            .collect()
    }

    async fn mark_reverted(&self, id: &str, reverted_at: DateTime<Utc>) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE calendar_imports
             SET reverted_at = ?
             WHERE id = ? AND reverted_at IS NULL",
        )
        .bind(timestamp_to_db(reverted_at))
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn active_entries_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<DayEntry>> {
        let rows = sqlx::query(
            "SELECT e.date, e.kind, e.label, e.is_laborable, e.scope
             FROM calendar_import_entries e
             JOIN calendar_imports i ON i.id = e.import_id
             WHERE i.reverted_at IS NULL AND e.date >= ? AND e.date <= ?
             ORDER BY i.created_at ASC, i.id ASC, e.date ASC",
        )
        .bind(date_to_db(from))
        .bind(date_to_db(to))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }
}

fn optional_timestamp(value: Option<String>) -> DomainResult<Option<DateTime<Utc>>> {
    value.as_deref().map(timestamp_from_db).transpose()
}
