use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    Vacaciones,
    BajaMedica,
}

impl AbsenceType {
    pub fn label(&self) -> &'static str {
        match self {
            AbsenceType::Vacaciones => "Vacaciones",
            AbsenceType::BajaMedica => "Baja médica",
        }
    }
}

impl FromStr for AbsenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vacaciones" => Ok(AbsenceType::Vacaciones),
            "baja_medica" => Ok(AbsenceType::BajaMedica),
            _ => Err(format!("Invalid absence type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    Pendiente,
    Aprobado,
    Rechazado,
}

impl fmt::Display for AbsenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsenceStatus::Pendiente => write!(f, "pendiente"),
            AbsenceStatus::Aprobado => write!(f, "aprobado"),
            AbsenceStatus::Rechazado => write!(f, "rechazado"),
        }
    }
}

impl FromStr for AbsenceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendiente" => Ok(AbsenceStatus::Pendiente),
            "aprobado" => Ok(AbsenceStatus::Aprobado),
            "rechazado" => Ok(AbsenceStatus::Rechazado),
            _ => Err(format!("Invalid absence status: {}", s)),
        }
    }
}

/// Employee absence request, owned by the absence subsystem (read-only here)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    pub id: String,
    pub employee_id: String,
    pub absence_type: AbsenceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: AbsenceStatus,
}

impl Absence {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Approved and pending absences block the day; rejected ones are ignored
    pub fn is_effective(&self) -> bool {
        self.status != AbsenceStatus::Rechazado
    }
}
