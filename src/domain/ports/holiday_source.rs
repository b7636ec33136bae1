use crate::domain::entities::PublicHoliday;
use crate::domain::errors::HolidayError;
use async_trait::async_trait;

/// External provider of public holidays
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch every public holiday of `country` in `year`
    async fn fetch_year(&self, year: i32, country: &str) -> Result<Vec<PublicHoliday>, HolidayError>;
}
