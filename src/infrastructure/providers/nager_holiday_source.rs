use crate::domain::entities::PublicHoliday;
use crate::domain::errors::HolidayError;
use crate::domain::ports::holiday_source::HolidaySource;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Public holiday provider speaking the Nager.Date API
/// (`GET {base}/PublicHolidays/{year}/{country}`)
#[derive(Clone)]
pub struct NagerHolidaySource {
    http_client: Client,
    base_url: String,
}

impl NagerHolidaySource {
    /// The timeout bounds the whole request so a slow provider cannot
    /// stall calendar queries
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn year_url(&self, year: i32, country: &str) -> String {
        format!("{}/PublicHolidays/{}/{}", self.base_url, year, country)
    }
}

#[async_trait]
impl HolidaySource for NagerHolidaySource {
    async fn fetch_year(&self, year: i32, country: &str) -> Result<Vec<PublicHoliday>, HolidayError> {
        let url = self.year_url(year, country);
        debug!("Requesting {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            let error_msg = if e.is_timeout() {
                format!("request to {} timed out: {}", url, e)
            } else if e.is_connect() {
                format!("connection to {} failed: {}", url, e)
            } else {
                format!("request to {} failed: {}", url, e)
            };
            warn!("{}", error_msg);
            HolidayError::Fetch(error_msg)
        })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            // The provider knows no holidays for this country/year
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(HolidayError::Fetch(format!(
                "{} answered HTTP {}",
                url,
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| HolidayError::Fetch(format!("reading body of {} failed: {}", url, e)))?;

        serde_json::from_str(&body).map_err(|e| HolidayError::Parse(e.to_string()))
    }
}
