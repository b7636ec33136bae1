use crate::application::services::{
    CalendarService, CompanyCalendarService, HolidayCacheService, ImportService,
};

/// Shared handler state. Services are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub calendar_service: CalendarService,
    pub holiday_service: HolidayCacheService,
    pub import_service: ImportService,
    pub company_calendar_service: CompanyCalendarService,
}
