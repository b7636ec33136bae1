use super::day_entry::DayEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable batch of day entries confirmed from one parsed document.
///
/// Imports are append-only. Reverting only sets `reverted_at`; the entries
/// stay available for auditing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarImport {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub origin: String,
    pub reverted_at: Option<DateTime<Utc>>,
    /// Sorted ascending by date, one entry per date
    pub entries: Vec<DayEntry>,
}

impl CalendarImport {
    pub fn new(origin: String, mut entries: Vec<DayEntry>) -> Self {
        entries.sort_by_key(|entry| entry.date);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            origin,
            reverted_at: None,
            entries,
        }
    }

    pub fn is_reverted(&self) -> bool {
        self.reverted_at.is_some()
    }
}

/// Import listing row, without the entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub origin: String,
    pub reverted_at: Option<DateTime<Utc>>,
    pub entry_count: i64,
}

/// Request body for confirming a reviewed import
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmImportRequest {
    pub origin: String,
    pub entries: Vec<DayEntry>,
}

/// Request body for parsing raw OCR text
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewImportRequest {
    pub text: String,
}

/// Parsed candidates for human review
#[derive(Debug, Clone, Serialize)]
pub struct ImportPreview {
    pub year: i32,
    pub year_detected: bool,
    pub entries: Vec<DayEntry>,
}
