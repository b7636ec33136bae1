pub mod absence_repository;
pub mod company_calendar_repository;
pub mod holiday_repository;
pub mod holiday_source;
pub mod import_repository;
pub mod worked_time_repository;
