pub mod calendar_service;
pub mod company_calendar_service;
pub mod holiday_cache_service;
pub mod import_service;

pub use calendar_service::CalendarService;
pub use company_calendar_service::CompanyCalendarService;
pub use holiday_cache_service::HolidayCacheService;
pub use import_service::ImportService;
