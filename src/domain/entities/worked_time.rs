use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minutes actually worked by an employee on one day (from the time clock)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkedTimeMarker {
    pub employee_id: String,
    pub date: NaiveDate,
    pub minutes: f64,
}

/// Raw clock-in/clock-out record, owned by the time-clock subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEntry {
    pub employee_id: String,
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
}

impl ClockEntry {
    /// Worked minutes of a closed interval. Open or inverted intervals count zero.
    pub fn worked_minutes(&self) -> f64 {
        match self.clock_out {
            Some(out) if out > self.clock_in => (out - self.clock_in).num_seconds() as f64 / 60.0,
            _ => 0.0,
        }
    }
}

/// Sum clock entries per (employee, clock-in date).
///
/// Intervals crossing midnight are attributed to the day they started.
pub fn aggregate_worked_minutes(entries: &[ClockEntry]) -> Vec<WorkedTimeMarker> {
    let mut totals: BTreeMap<(String, NaiveDate), f64> = BTreeMap::new();
    for entry in entries {
        *totals
            .entry((entry.employee_id.clone(), entry.clock_in.date()))
            .or_insert(0.0) += entry.worked_minutes();
    }

    totals
        .into_iter()
        .map(|((employee_id, date), minutes)| WorkedTimeMarker {
            employee_id,
            date,
            minutes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_aggregates_per_day() {
        let entries = vec![
            ClockEntry {
                employee_id: "emp-1".to_string(),
                clock_in: at(3, 8, 0),
                clock_out: Some(at(3, 14, 0)),
            },
            ClockEntry {
                employee_id: "emp-1".to_string(),
                clock_in: at(3, 15, 0),
                clock_out: Some(at(3, 17, 30)),
            },
            ClockEntry {
                employee_id: "emp-1".to_string(),
                clock_in: at(4, 8, 0),
                clock_out: None,
            },
        ];

        let markers = aggregate_worked_minutes(&entries);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].date, at(3, 0, 0).date());
        assert_eq!(markers[0].minutes, 510.0);
        assert_eq!(markers[1].minutes, 0.0);
    }

    #[test]
    fn test_inverted_interval_counts_zero() {
        let entry = ClockEntry {
            employee_id: "emp-1".to_string(),
            clock_in: at(3, 18, 0),
            clock_out: Some(at(3, 9, 0)),
        };
        assert_eq!(entry.worked_minutes(), 0.0);
    }
}
