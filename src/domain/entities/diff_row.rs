use super::day_entry::DayEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffStatus {
    #[serde(rename = "igual")]
    Igual,
    #[serde(rename = "añadido")]
    Anadido,
    #[serde(rename = "eliminado")]
    Eliminado,
    #[serde(rename = "modificado")]
    Modificado,
}

/// One date's classification when comparing import A against import B
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffRow {
    pub date: NaiveDate,
    pub status: DiffStatus,
    pub a: Option<DayEntry>,
    pub b: Option<DayEntry>,
}
