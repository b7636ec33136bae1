pub mod calendar;
pub mod company_calendar;
pub mod holidays;
pub mod imports;
