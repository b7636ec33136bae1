use crate::domain::entities::{DayEntry, DiffRow, DiffStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Which imports carry a given date
#[derive(Debug, Clone, Copy)]
enum Sides<'a> {
    OnlyA(&'a DayEntry),
    OnlyB(&'a DayEntry),
    Both(&'a DayEntry, &'a DayEntry),
}

impl Sides<'_> {
    fn into_row(self, date: NaiveDate) -> DiffRow {
        let (status, a, b) = match self {
            Sides::OnlyA(a) => (DiffStatus::Eliminado, Some(a), None),
            Sides::OnlyB(b) => (DiffStatus::Anadido, None, Some(b)),
            Sides::Both(a, b) if a.same_content(b) => (DiffStatus::Igual, Some(a), Some(b)),
            Sides::Both(a, b) => (DiffStatus::Modificado, Some(a), Some(b)),
        };

        DiffRow {
            date,
            status,
            a: a.cloned(),
            b: b.cloned(),
        }
    }
}

/// Compare the entries of import A against import B, date by date.
///
/// Dates only in B are `añadido`, only in A `eliminado`. Rows come out
/// sorted ascending by date.
pub fn diff_entries(a: &[DayEntry], b: &[DayEntry]) -> Vec<DiffRow> {
    let mut by_date: BTreeMap<NaiveDate, Sides> =
        a.iter().map(|entry| (entry.date, Sides::OnlyA(entry))).collect();

    for entry in b {
        let sides = match by_date.get(&entry.date).copied() {
            Some(Sides::OnlyA(left)) | Some(Sides::Both(left, _)) => Sides::Both(left, entry),
            Some(Sides::OnlyB(_)) | None => Sides::OnlyB(entry),
        };
        by_date.insert(entry.date, sides);
    }

    by_date
        .into_iter()
        .map(|(date, sides)| sides.into_row(date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DayKind;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn import_a() -> Vec<DayEntry> {
        vec![DayEntry::new(date(4, 17), DayKind::FestivoLocal, None, false)]
    }

    fn import_b() -> Vec<DayEntry> {
        vec![
            DayEntry::new(date(4, 17), DayKind::CierreEmpresa, None, false),
            DayEntry::new(date(5, 1), DayKind::FestivoNacional, None, false),
        ]
    }

    #[test]
    fn test_modified_and_added() {
        let rows = diff_entries(&import_a(), &import_b());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, date(4, 17));
        assert_eq!(rows[0].status, DiffStatus::Modificado);
        assert_eq!(rows[0].a.as_ref().map(|e| e.kind), Some(DayKind::FestivoLocal));
        assert_eq!(rows[0].b.as_ref().map(|e| e.kind), Some(DayKind::CierreEmpresa));
        assert_eq!(rows[1].date, date(5, 1));
        assert_eq!(rows[1].status, DiffStatus::Anadido);
        assert!(rows[1].a.is_none());
    }

    #[test]
    fn test_direction_flips_added_and_removed() {
        let rows = diff_entries(&import_b(), &import_a());
        assert_eq!(rows[1].status, DiffStatus::Eliminado);
        assert!(rows[1].b.is_none());
        assert_eq!(rows[0].status, DiffStatus::Modificado);
    }

    #[test]
    fn test_self_comparison_is_all_equal() {
        let rows = diff_entries(&import_b(), &import_b());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.status == DiffStatus::Igual));
    }

    #[test]
    fn test_label_and_flag_changes_are_modifications() {
        let a = vec![DayEntry::new(date(12, 24), DayKind::Convenio, Some("Nochebuena".to_string()), true)];
        let relabeled = vec![DayEntry::new(date(12, 24), DayKind::Convenio, Some("Media jornada".to_string()), true)];
        let reflagged = vec![DayEntry::new(date(12, 24), DayKind::Convenio, Some("Nochebuena".to_string()), false)];

        assert_eq!(diff_entries(&a, &relabeled)[0].status, DiffStatus::Modificado);
        assert_eq!(diff_entries(&a, &reflagged)[0].status, DiffStatus::Modificado);
    }

    #[test]
    fn test_empty_sides() {
        assert!(diff_entries(&[], &[]).is_empty());
        let rows = diff_entries(&[], &import_a());
        assert_eq!(rows[0].status, DiffStatus::Anadido);
    }

    #[test]
    fn test_rows_carry_exactly_the_sides_of_their_status() {
        let a = vec![
            DayEntry::new(date(1, 1), DayKind::FestivoNacional, None, false),
            DayEntry::new(date(3, 19), DayKind::FestivoLocal, None, false),
            DayEntry::new(date(8, 15), DayKind::FestivoNacional, None, false),
        ];
        let b = vec![
            DayEntry::new(date(8, 15), DayKind::FestivoNacional, None, false),
            DayEntry::new(date(1, 1), DayKind::FestivoNacional, None, false),
            DayEntry::new(date(3, 19), DayKind::Convenio, None, true),
            DayEntry::new(date(12, 8), DayKind::FestivoNacional, None, false),
        ];

        let rows = diff_entries(&a, &b);
        let statuses: Vec<_> = rows.iter().map(|row| (row.date, row.status)).collect();
        assert_eq!(
            statuses,
            vec![
                (date(1, 1), DiffStatus::Igual),
                (date(3, 19), DiffStatus::Modificado),
                (date(8, 15), DiffStatus::Igual),
                (date(12, 8), DiffStatus::Anadido),
            ]
        );

        for row in &rows {
            match row.status {
                DiffStatus::Anadido => assert!(row.a.is_none() && row.b.is_some()),
                DiffStatus::Eliminado => assert!(row.a.is_some() && row.b.is_none()),
                DiffStatus::Igual | DiffStatus::Modificado => {
                    assert!(row.a.is_some() && row.b.is_some())
                }
            }
        }
    }

    #[test]
    fn test_status_serializes_in_spanish() {
        assert_eq!(serde_json::to_string(&DiffStatus::Anadido).unwrap(), "\"añadido\"");
        assert_eq!(serde_json::to_string(&DiffStatus::Igual).unwrap(), "\"igual\"");
    }
}
