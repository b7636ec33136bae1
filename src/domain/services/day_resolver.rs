//! Day-state resolution.
//!
//! Every date starts as a plain laborable day. Signals are looked up in a
//! fixed precedence order and the first one found decides the day:
//! absence, company override, external holiday, worked time.

use crate::domain::entities::{
    Absence, AbsenceStatus, DayCategory, DayEntry, ResolvedDay, SourceKind, WorkedTimeMarker,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Everything the resolver needs for one employee, indexed by date
#[derive(Debug, Clone, Default)]
pub struct ResolutionInputs {
    absences: Vec<Absence>,
    company_days: BTreeMap<NaiveDate, DayEntry>,
    holidays: BTreeMap<NaiveDate, DayEntry>,
    worked_minutes: BTreeMap<NaiveDate, f64>,
}

impl ResolutionInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_absences(mut self, absences: impl IntoIterator<Item = Absence>) -> Self {
        self.absences.extend(absences);
        self
    }

    /// Company overrides: import entries (oldest import first) then manual
    /// rows. Later entries for a date replace earlier ones.
    pub fn with_company_days(
        mut self,
        import_entries: impl IntoIterator<Item = DayEntry>,
        manual_rows: impl IntoIterator<Item = DayEntry>,
    ) -> Self {
        for entry in import_entries.into_iter().chain(manual_rows) {
            self.company_days.insert(entry.date, entry);
        }
        self
    }

    /// External holidays applicable to `region`
    pub fn with_holidays(
        mut self,
        holidays: impl IntoIterator<Item = DayEntry>,
        region: Option<&str>,
    ) -> Self {
        for holiday in holidays {
            if holiday.applies_to(region) {
                self.holidays.insert(holiday.date, holiday);
            }
        }
        self
    }

    pub fn with_worked_time(mut self, markers: impl IntoIterator<Item = WorkedTimeMarker>) -> Self {
        for marker in markers {
            *self.worked_minutes.entry(marker.date).or_insert(0.0) += marker.minutes;
        }
        self
    }
}

/// A piece of evidence about one date
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DaySignal<'a> {
    Absence(&'a Absence),
    CompanyOverride(&'a DayEntry),
    ExternalHoliday(&'a DayEntry),
    WorkedTime(f64),
}

impl DaySignal<'_> {
    /// Turn the winning signal into the day's state
    pub fn resolve(&self, employee_id: &str, date: NaiveDate) -> ResolvedDay {
        let base = ResolvedDay::default_for(employee_id, date);
        match *self {
            DaySignal::Absence(absence) => {
                let mut label = absence.absence_type.label().to_string();
                if absence.status != AbsenceStatus::Aprobado {
                    label = format!("{} ({})", label, absence.status);
                }
                ResolvedDay {
                    label: Some(label),
                    category: absence.absence_type.into(),
                    is_laborable: false,
                    source_kind: SourceKind::Absence,
                    ..base
                }
            }
            DaySignal::CompanyOverride(entry) => ResolvedDay {
                label: Some(entry.label_or_kind()),
                category: entry.kind.into(),
                is_laborable: entry.is_laborable,
                source_kind: SourceKind::CompanyOverride,
                ..base
            },
            DaySignal::ExternalHoliday(holiday) => ResolvedDay {
                label: Some(holiday.label_or_kind()),
                category: holiday.kind.into(),
                is_laborable: false,
                source_kind: SourceKind::ExternalHoliday,
                ..base
            },
            DaySignal::WorkedTime(minutes) => ResolvedDay {
                label: Some(format!("Trabajo ({} min)", minutes.round() as i64)),
                category: DayCategory::Trabajo,
                is_laborable: true,
                source_kind: SourceKind::WorkedTime,
                ..base
            },
        }
    }
}

/// Looks up one kind of signal for a date
pub type SignalLookup = for<'a> fn(&'a ResolutionInputs, NaiveDate) -> Option<DaySignal<'a>>;

/// Lookups in precedence order; the first hit decides the day
pub const PRECEDENCE: [SignalLookup; 4] = [
    absence_signal,
    company_override_signal,
    external_holiday_signal,
    worked_time_signal,
];

/// Approved or pending absence covering the date; approved wins a tie
pub fn absence_signal(inputs: &ResolutionInputs, date: NaiveDate) -> Option<DaySignal<'_>> {
    inputs
        .absences
        .iter()
        .filter(|absence| absence.is_effective() && absence.covers(date))
        .min_by_key(|absence| absence.status != AbsenceStatus::Aprobado)
        .map(DaySignal::Absence)
}

pub fn company_override_signal(inputs: &ResolutionInputs, date: NaiveDate) -> Option<DaySignal<'_>> {
    inputs.company_days.get(&date).map(DaySignal::CompanyOverride)
}

pub fn external_holiday_signal(inputs: &ResolutionInputs, date: NaiveDate) -> Option<DaySignal<'_>> {
    inputs.holidays.get(&date).map(DaySignal::ExternalHoliday)
}

pub fn worked_time_signal(inputs: &ResolutionInputs, date: NaiveDate) -> Option<DaySignal<'_>> {
    inputs
        .worked_minutes
        .get(&date)
        .copied()
        .filter(|minutes| *minutes > 0.0)
        .map(DaySignal::WorkedTime)
}

/// State of a single date
pub fn resolve_day(employee_id: &str, date: NaiveDate, inputs: &ResolutionInputs) -> ResolvedDay {
    PRECEDENCE
        .iter()
        .find_map(|lookup| lookup(inputs, date))
        .map(|signal| signal.resolve(employee_id, date))
        .unwrap_or_else(|| ResolvedDay::default_for(employee_id, date))
}

/// One resolved day per date of the inclusive range
pub fn resolve_range(
    employee_id: &str,
    from: NaiveDate,
    to: NaiveDate,
    inputs: &ResolutionInputs,
) -> DomainResult<Vec<ResolvedDay>> {
    validate_range(from, to)?;

    Ok(from
        .iter_days()
        .take_while(|date| *date <= to)
        .map(|date| resolve_day(employee_id, date, inputs))
        .collect())
}

/// Longest accepted range, in days (three years, one of them leap)
pub const MAX_RANGE_DAYS: i64 = 1096;

pub fn validate_range(from: NaiveDate, to: NaiveDate) -> DomainResult<()> {
    if from > to {
        return Err(DomainError::InvalidDateRange { from, to });
    }

    let days = (to - from).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(DomainError::Validation(format!(
            "Date range {}..{} spans {} days, at most {} are allowed",
            from, to, days, MAX_RANGE_DAYS
        )));
    }
    Ok(())
}
