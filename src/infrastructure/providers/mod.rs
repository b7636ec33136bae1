pub mod nager_holiday_source;

pub use nager_holiday_source::NagerHolidaySource;
