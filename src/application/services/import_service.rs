use crate::domain::entities::{CalendarImport, DayEntry, DiffRow, ImportPreview, ImportSummary};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::import_repository::ImportRepository;
use crate::domain::services::{calendar_parser, import_diff};
use chrono::{Datelike, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// OCR import lifecycle: preview, confirm, revert and audit
#[derive(Clone)]
pub struct ImportService {
    import_repo: Arc<dyn ImportRepository>,
}

impl ImportService {
    pub fn new(import_repo: Arc<dyn ImportRepository>) -> Self {
        Self { import_repo }
    }

    /// Parse raw OCR text into candidates for human review. Nothing is stored.
    pub fn preview(&self, raw_text: &str) -> ImportPreview {
        let detected = calendar_parser::infer_year(raw_text);
        let year = detected.unwrap_or_else(|| chrono::Local::now().year());

        ImportPreview {
            year,
            year_detected: detected.is_some(),
            entries: calendar_parser::parse_with_default_year(raw_text, year),
        }
    }

    /// Persist reviewed entries as a new immutable import
    pub async fn save(&self, entries: Vec<DayEntry>, origin: String) -> DomainResult<CalendarImport> {
        let origin = origin.trim().to_string();
        if origin.is_empty() {
            return Err(DomainError::Validation("Import origin cannot be empty".to_string()));
        }
        if entries.is_empty() {
            return Err(DomainError::Validation("An import needs at least one entry".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.date) {
                return Err(DomainError::Validation(format!(
                    "Duplicate entry for date {}",
                    entry.date
                )));
            }
        }

        let import = CalendarImport::new(origin, entries);
        self.import_repo.save_import(&import).await?;

        metrics::counter!("calendar_imports_saved_total").increment(1);
        info!(
            "Saved calendar import {} from '{}' with {} entries",
            import.id,
            import.origin,
            import.entries.len()
        );

        Ok(import)
    }

    /// Mark an import reverted. Reverting twice is a no-op.
    pub async fn revert(&self, import_id: &str) -> DomainResult<CalendarImport> {
        let changed = self.import_repo.mark_reverted(import_id, Utc::now()).await?;
        let import = self.get(import_id).await?;

        if changed {
            metrics::counter!("calendar_imports_reverted_total").increment(1);
            info!("Reverted calendar import {}", import_id);
        } else {
            info!("Calendar import {} was already reverted", import_id);
        }

        Ok(import)
    }

    pub async fn get(&self, import_id: &str) -> DomainResult<CalendarImport> {
        self.import_repo
            .get_import(import_id)
            .await?
            .ok_or_else(|| DomainError::ImportNotFound(import_id.to_string()))
    }

    pub async fn list(&self) -> DomainResult<Vec<ImportSummary>> {
        self.import_repo.list_imports().await
    }

    /// Date-by-date comparison of two imports, reverted ones included
    pub async fn compare(&self, import_a_id: &str, import_b_id: &str) -> DomainResult<Vec<DiffRow>> {
        let a = self.get(import_a_id).await?;
        let b = self.get(import_b_id).await?;

        Ok(import_diff::diff_entries(&a.entries, &b.entries))
    }
}
