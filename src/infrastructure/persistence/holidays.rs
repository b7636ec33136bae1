use super::{date_from_db, date_to_db, kind_from_db, optional_text, timestamp_from_db, timestamp_to_db, Database};
use crate::domain::entities::{DayEntry, HolidayYear};
use crate::domain::errors::DomainResult;
use crate::domain::ports::holiday_repository::HolidayRepository;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::Row;

#[async_trait]
impl HolidayRepository for Database {
    async fn get_holiday_year(&self, country: &str, year: i32) -> DomainResult<Option<HolidayYear>> {
        let row = sqlx::query(
            "SELECT country, year, holiday_count, fetched_at
             FROM holiday_years
             WHERE country = ? AND year = ?",
        )
        .bind(country.to_string())
        .bind(year as i64)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            Ok(Some(HolidayYear {
                country: row.try_get("country")?,
                year: row.try_get::<i64, _>("year")? as i32,
                holiday_count: row.try_get("holiday_count")?,
                fetched_at: timestamp_from_db(&row.try_get::<String, _>("fetched_at")?)?,
            }))
        } else {
            Ok(None)
        }
    }

    async fn store_holiday_year(
        &self,
        country: &str,
        year: i32,
        holidays: &[DayEntry],
    ) -> DomainResult<()> {
        let now = timestamp_to_db(Utc::now());
        let mut tx = self.pool.begin().await?;

        // Keyed by date: concurrent writers of the same year converge on
        // the same rows instead of duplicating them
        for holiday in holidays {
            sqlx::query(
                "INSERT INTO holidays (date, country, kind, label, scope, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?)
                 ON CONFLICT(date) DO UPDATE SET
                    country = excluded.country,
                    kind = excluded.kind,
                    label = excluded.label,
                    scope = excluded.scope,
                    updated_at = excluded.updated_at",
            )
            .bind(date_to_db(holiday.date))
            .bind(country.to_string())
            .bind(holiday.kind.as_str().to_string())
            .bind(holiday.label.clone())
            .bind(holiday.scope.clone())
            .bind(now.clone())
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            "INSERT INTO holiday_years (country, year, holiday_count, fetched_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(country, year) DO UPDATE SET
                holiday_count = excluded.holiday_count,
                fetched_at = excluded.fetched_at",
        )
        .bind(country.to_string())
        .bind(year as i64)
        .bind(holidays.len() as i64)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn list_holidays_between(
        &self,
        country: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<DayEntry>> {
        let rows = sqlx::query(
            "SELECT date, kind, label, scope
             FROM holidays
             WHERE country = ? AND date >= ? AND date <= ?
             ORDER BY date ASC",
        )
        .bind(country.to_string())
        .bind(date_to_db(from))
        .bind(date_to_db(to))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DomainResult<DayEntry> {
                Ok(DayEntry {
                    date: date_from_db(&row.try_get::<String, _>("date")?)?,
                    kind: kind_from_db(&row.try_get::<String, _>("kind")?)?,
                    label: optional_text(row, "label"),
                    is_laborable: false,
                    scope: optional_text(row, "scope"),
                })
            })
            .collect()
    }
}
