pub mod absence;
pub mod calendar_import;
pub mod day_entry;
pub mod diff_row;
pub mod holiday;
pub mod resolved_day;
pub mod worked_time;

pub use absence::*;
pub use calendar_import::*;
pub use day_entry::*;
pub use diff_row::*;
pub use holiday::*;
pub use resolved_day::*;
pub use worked_time::*;
