pub mod calendar_parser;
pub mod day_resolver;
pub mod import_diff;
