use super::absence::AbsenceType;
use super::day_entry::DayKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What kind of day a resolved state describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    None,
    Vacaciones,
    BajaMedica,
    FestivoNacional,
    FestivoLocal,
    CierreEmpresa,
    LaborableExtra,
    Convenio,
    Trabajo,
}

impl From<DayKind> for DayCategory {
    fn from(kind: DayKind) -> Self {
        match kind {
            DayKind::FestivoNacional => DayCategory::FestivoNacional,
            DayKind::FestivoLocal => DayCategory::FestivoLocal,
            DayKind::CierreEmpresa => DayCategory::CierreEmpresa,
            DayKind::LaborableExtra => DayCategory::LaborableExtra,
            DayKind::Convenio => DayCategory::Convenio,
        }
    }
}

impl From<AbsenceType> for DayCategory {
    fn from(absence_type: AbsenceType) -> Self {
        match absence_type {
            AbsenceType::Vacaciones => DayCategory::Vacaciones,
            AbsenceType::BajaMedica => DayCategory::BajaMedica,
        }
    }
}

/// Which input decided a resolved day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Default,
    Absence,
    CompanyOverride,
    ExternalHoliday,
    WorkedTime,
}

/// Final state of one date for one employee. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDay {
    pub employee_id: String,
    pub date: NaiveDate,
    pub label: Option<String>,
    pub category: DayCategory,
    pub is_laborable: bool,
    pub source_kind: SourceKind,
}

impl ResolvedDay {
    /// Plain laborable day with no label
    pub fn default_for(employee_id: &str, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            date,
            label: None,
            category: DayCategory::None,
            is_laborable: true,
            source_kind: SourceKind::Default,
        }
    }
}
