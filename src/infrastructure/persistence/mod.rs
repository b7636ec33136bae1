use crate::domain::entities::{DayEntry, DayKind};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{
    any::{AnyConnectOptions, AnyPoolOptions, AnyRow},
    AnyPool, ConnectOptions, Row,
};
use std::str::FromStr;
use log::LevelFilter;

mod absences;
mod company_calendar;
mod holidays;
mod imports;
mod worked_time;

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: AnyPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        // Ensure drivers are installed for AnyPool
        sqlx::any::install_default_drivers();

        let mut connect_options = AnyConnectOptions::from_str(database_url)?;

        connect_options = connect_options
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, std::time::Duration::from_secs(1));

        let pool = AnyPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .connect_with(connect_options)
            .await?;

        // Enable optimizations for SQLite
        if database_url.starts_with("sqlite") {
            sqlx::query("PRAGMA journal_mode = WAL")
                .execute(&pool)
                .await?;
            sqlx::query("PRAGMA busy_timeout = 5000")
                .execute(&pool)
                .await?;
            sqlx::query("PRAGMA foreign_keys = ON")
                .execute(&pool)
                .await?;
        }

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

// Column codecs. Dates are ISO text, timestamps RFC 3339 text.

pub(crate) fn date_to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn date_from_db(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| DomainError::Storage(format!("Invalid stored date '{}': {}", value, e)))
}

pub(crate) fn timestamp_to_db(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

pub(crate) fn timestamp_from_db(value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| DomainError::Storage(format!("Invalid stored timestamp '{}': {}", value, e)))
}

pub(crate) fn kind_from_db(value: &str) -> DomainResult<DayKind> {
    value.parse().map_err(DomainError::Storage)
}

pub(crate) fn bool_from_db(value: i64) -> bool {
    value != 0
}

/// Nullable TEXT column. The Any driver cannot decode NULL into
/// `Option<String>`, so a failed decode reads as absent.
pub(crate) fn optional_text(row: &AnyRow, column: &str) -> Option<String> {
    row.try_get::<Option<String>, _>(column).ok().flatten()
}

/// Row with `date, kind, label, is_laborable, scope` columns
pub(crate) fn entry_from_row(row: &AnyRow) -> DomainResult<DayEntry> {
    Ok(DayEntry {
        date: date_from_db(&row.try_get::<String, _>("date")?)?,
        kind: kind_from_db(&row.try_get::<String, _>("kind")?)?,
        label: optional_text(row, "label"),
        is_laborable: bool_from_db(row.try_get("is_laborable")?),
        scope: optional_text(row, "scope"),
    })
}
