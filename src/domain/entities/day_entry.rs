use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a calendar day record, whatever its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    FestivoNacional,
    FestivoLocal,
    CierreEmpresa,
    LaborableExtra,
    Convenio,
}

impl DayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKind::FestivoNacional => "festivo_nacional",
            DayKind::FestivoLocal => "festivo_local",
            DayKind::CierreEmpresa => "cierre_empresa",
            DayKind::LaborableExtra => "laborable_extra",
            DayKind::Convenio => "convenio",
        }
    }

    /// Human readable name, used when an entry carries no label of its own
    pub fn display_label(&self) -> &'static str {
        match self {
            DayKind::FestivoNacional => "Festivo nacional",
            DayKind::FestivoLocal => "Festivo local",
            DayKind::CierreEmpresa => "Cierre de empresa",
            DayKind::LaborableExtra => "Laborable extra",
            DayKind::Convenio => "Convenio",
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "festivo_nacional" => Ok(DayKind::FestivoNacional),
            "festivo_local" => Ok(DayKind::FestivoLocal),
            "cierre_empresa" => Ok(DayKind::CierreEmpresa),
            "laborable_extra" => Ok(DayKind::LaborableExtra),
            "convenio" => Ok(DayKind::Convenio),
            _ => Err(format!("Invalid day kind: {}", s)),
        }
    }
}

/// One source-level record for a single date.
///
/// A source supplies at most one entry per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub label: Option<String>,
    pub is_laborable: bool,
    /// CSV of subdivision codes when the entry is not nationwide
    #[serde(default)]
    pub scope: Option<String>,
}

impl DayEntry {
    pub fn new(date: NaiveDate, kind: DayKind, label: Option<String>, is_laborable: bool) -> Self {
        Self {
            date,
            kind,
            label,
            is_laborable,
            scope: None,
        }
    }

    /// Entry label, or the kind's name when the entry has none
    pub fn label_or_kind(&self) -> String {
        match self.label.as_deref() {
            Some(label) if !label.trim().is_empty() => label.to_string(),
            _ => self.kind.display_label().to_string(),
        }
    }

    /// Field equality used when auditing imports. Scope is not compared.
    pub fn same_content(&self, other: &DayEntry) -> bool {
        self.kind == other.kind
            && self.label == other.label
            && self.is_laborable == other.is_laborable
    }

    /// Whether the entry applies to the given region.
    ///
    /// Entries without scope are nationwide and apply everywhere. Scoped
    /// entries only apply when the region is listed.
    pub fn applies_to(&self, region: Option<&str>) -> bool {
        match self.scope.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(scope) => region.map_or(false, |region| {
                scope
                    .split(',')
                    .any(|code| code.trim().eq_ignore_ascii_case(region.trim()))
            }),
        }
    }
}
