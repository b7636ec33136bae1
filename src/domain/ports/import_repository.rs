use crate::domain::entities::{CalendarImport, DayEntry, ImportSummary};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

/// Append-only store of confirmed calendar imports
#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// Persist the import and all of its entries in one transaction
    async fn save_import(&self, import: &CalendarImport) -> DomainResult<()>;

    /// Load an import with its entries, reverted or not
    async fn get_import(&self, id: &str) -> DomainResult<Option<CalendarImport>>;

    /// Newest first
    async fn list_imports(&self) -> DomainResult<Vec<ImportSummary>>;

    /// Set `reverted_at` if not set yet. Returns false when nothing changed.
    async fn mark_reverted(&self, id: &str, reverted_at: DateTime<Utc>) -> DomainResult<bool>;

    /// Entries of non-reverted imports within the range, ordered by import
    /// creation (oldest first) so that later imports override earlier ones.
    async fn active_entries_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<DayEntry>>;
}
