use async_trait::async_trait;
use calendario::domain::entities::PublicHoliday;
use calendario::domain::errors::HolidayError;
use calendario::domain::ports::holiday_source::HolidaySource;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory holiday provider that counts calls and can be switched off
pub struct StubHolidaySource {
    holidays: Mutex<Vec<PublicHoliday>>,
    calls: AtomicUsize,
    failing: AtomicBool,
    delay: Duration,
}

impl StubHolidaySource {
    pub fn new(holidays: Vec<PublicHoliday>) -> Self {
        Self {
            holidays: Mutex::new(holidays),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            delay: Duration::from_millis(0),
        }
    }

    /// Every fetch sleeps before answering, so concurrent callers overlap
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing() -> Self {
        let source = Self::new(Vec::new());
        source.set_failing(true);
        source
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn replace_holidays(&self, holidays: Vec<PublicHoliday>) {
        *self.holidays.lock().unwrap() = holidays;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidaySource for StubHolidaySource {
    async fn fetch_year(&self, year: i32, _country: &str) -> Result<Vec<PublicHoliday>, HolidayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(HolidayError::Fetch("provider unreachable".to_string()));
        }

        let prefix = format!("{}-", year);
        Ok(self
            .holidays
            .lock()
            .unwrap()
            .iter()
            .filter(|holiday| holiday.date.starts_with(&prefix))
            .cloned()
            .collect())
    }
}

pub fn public_holiday(date: &str, local_name: &str, counties: Option<&[&str]>) -> PublicHoliday {
    PublicHoliday {
        date: date.to_string(),
        local_name: local_name.to_string(),
        name: local_name.to_string(),
        counties: counties.map(|codes| codes.iter().map(|c| c.to_string()).collect()),
    }
}

/// A few Spanish holidays of 2025, one of them regional
pub fn spanish_holidays_2025() -> Vec<PublicHoliday> {
    vec![
        public_holiday("2025-01-01", "Año Nuevo", None),
        public_holiday("2025-01-06", "Epifanía del Señor", None),
        public_holiday("2025-05-01", "Fiesta del trabajo", None),
        public_holiday("2025-05-02", "Fiesta de la Comunidad de Madrid", Some(&["ES-MD"])),
    ]
}
