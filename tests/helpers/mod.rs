#![allow(dead_code, unused_imports)]
pub mod holiday_source;
pub mod test_db;

pub use holiday_source::*;
pub use test_db::*;
