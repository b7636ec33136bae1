use crate::domain::entities::{DayEntry, DayKind, EnsureYearOutcome, PublicHoliday};
use crate::domain::errors::{DomainResult, HolidayError};
use crate::domain::ports::holiday_repository::HolidayRepository;
use crate::domain::ports::holiday_source::HolidaySource;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Per-year public holiday cache.
///
/// `ensure_year` fetches a year from the provider at most once; later
/// calls only read the durable marker, so it is safe on any request path.
#[derive(Clone)]
pub struct HolidayCacheService {
    repo: Arc<dyn HolidayRepository>,
    source: Arc<dyn HolidaySource>,
    country: String,
    year_locks: Arc<Mutex<HashMap<i32, Arc<tokio::sync::Mutex<()>>>>>,
}

impl HolidayCacheService {
    pub fn new(
        repo: Arc<dyn HolidayRepository>,
        source: Arc<dyn HolidaySource>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            source,
            country: country.into(),
            year_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Fetch and store the year's holidays unless they are already cached
    pub async fn ensure_year(&self, year: i32) -> Result<EnsureYearOutcome, HolidayError> {
        self.sync_year(year, false).await
    }

    /// Fetch and upsert the year's holidays even when already cached
    pub async fn refresh_year(&self, year: i32) -> Result<EnsureYearOutcome, HolidayError> {
        self.sync_year(year, true).await
    }

    /// Stored holidays of a year, without triggering a fetch
    pub async fn list_year(&self, year: i32) -> DomainResult<Vec<DayEntry>> {
        let (Some(from), Some(to)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return Ok(Vec::new());
        };
        self.holidays_between(from, to).await
    }

    pub async fn holidays_between(&self, from: NaiveDate, to: NaiveDate) -> DomainResult<Vec<DayEntry>> {
        self.repo.list_holidays_between(&self.country, from, to).await
    }

    async fn sync_year(&self, year: i32, force: bool) -> Result<EnsureYearOutcome, HolidayError> {
        // Fast path without locking: the year is already cached
        if !force && self.is_cached(year).await? {
            return Ok(EnsureYearOutcome::skipped());
        }

        let lock = self.lock_for(year);
        let _guard = lock.lock().await;

        // Another caller may have stored the year while we waited
        if !force && self.is_cached(year).await? {
            debug!("Holidays for {} {} stored by a concurrent caller", self.country, year);
            return Ok(EnsureYearOutcome::skipped());
        }

        info!("Fetching public holidays for {} {}", self.country, year);
        let remote = match self.source.fetch_year(year, &self.country).await {
            Ok(remote) => remote,
            Err(e) => {
                metrics::counter!("holiday_fetches_total", "outcome" => "failed").increment(1);
                warn!("Holiday fetch for {} {} failed: {}", self.country, year, e);
                return Err(e);
            }
        };

        let holidays = normalize_holidays(&remote)?;
        self.repo
            .store_holiday_year(&self.country, year, &holidays)
            .await
            .map_err(|e| HolidayError::Storage(e.to_string()))?;

        metrics::counter!("holiday_fetches_total", "outcome" => "imported").increment(1);
        info!(
            "Stored {} public holidays for {} {}",
            holidays.len(),
            self.country,
            year
        );

        Ok(EnsureYearOutcome {
            imported: true,
            count: holidays.len(),
        })
    }

    async fn is_cached(&self, year: i32) -> Result<bool, HolidayError> {
        self.repo
            .get_holiday_year(&self.country, year)
            .await
            .map(|marker| marker.is_some())
            .map_err(|e| HolidayError::Storage(e.to_string()))
    }

    fn lock_for(&self, year: i32) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .year_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.entry(year).or_default().clone()
    }
}

/// Map provider records to day entries, one per date.
///
/// Nationwide records become `festivo_nacional` without scope, regional
/// ones `festivo_local` with a CSV of subdivision codes. When the provider
/// lists a date more than once, a nationwide record wins; otherwise the
/// regions are merged.
pub fn normalize_holidays(remote: &[PublicHoliday]) -> Result<Vec<DayEntry>, HolidayError> {
    let mut by_date: BTreeMap<NaiveDate, DayEntry> = BTreeMap::new();

    for holiday in remote {
        let date = NaiveDate::parse_from_str(&holiday.date, "%Y-%m-%d").map_err(|e| {
            HolidayError::Parse(format!("invalid holiday date '{}': {}", holiday.date, e))
        })?;

        let label = if holiday.local_name.trim().is_empty() {
            holiday.name.clone()
        } else {
            holiday.local_name.clone()
        };

        let entry = if holiday.is_nationwide() {
            DayEntry::new(date, DayKind::FestivoNacional, Some(label), false)
        } else {
            DayEntry {
                scope: holiday.counties.as_ref().map(|counties| counties.join(",")),
                ..DayEntry::new(date, DayKind::FestivoLocal, Some(label), false)
            }
        };

        match by_date.get_mut(&date) {
            None => {
                by_date.insert(date, entry);
            }
            Some(existing) if existing.scope.is_none() => {}
            Some(existing) if entry.scope.is_none() => *existing = entry,
            Some(existing) => {
                existing.scope = Some(merge_scopes(
                    existing.scope.as_deref().unwrap_or_default(),
                    entry.scope.as_deref().unwrap_or_default(),
                ));
            }
        }
    }

    Ok(by_date.into_values().collect())
}

fn merge_scopes(a: &str, b: &str) -> String {
    let mut codes: Vec<&str> = Vec::new();
    for code in a.split(',').chain(b.split(',')).map(str::trim) {
        if !code.is_empty() && !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes.join(",")
}
