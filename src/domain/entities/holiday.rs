use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public holiday as returned by the external provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    pub date: String, // YYYY-MM-DD
    pub local_name: String,
    pub name: String,
    #[serde(default)]
    pub counties: Option<Vec<String>>,
}

impl PublicHoliday {
    /// `counties == null || []` means the holiday is nationwide
    pub fn is_nationwide(&self) -> bool {
        self.counties.as_ref().map_or(true, |counties| counties.is_empty())
    }
}

/// Cache marker: holidays for `year` have been fetched and stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayYear {
    pub country: String,
    pub year: i32,
    pub holiday_count: i64,
    pub fetched_at: DateTime<Utc>,
}

/// Result of `ensure_year`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsureYearOutcome {
    pub imported: bool,
    pub count: usize,
}

impl EnsureYearOutcome {
    pub fn skipped() -> Self {
        Self {
            imported: false,
            count: 0,
        }
    }
}
