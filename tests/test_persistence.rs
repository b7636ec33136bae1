mod helpers;

use calendario::domain::entities::{CalendarImport, DayEntry, DayKind};
use calendario::domain::ports::company_calendar_repository::CompanyCalendarRepository;
use calendario::domain::ports::holiday_repository::HolidayRepository;
use calendario::domain::ports::import_repository::ImportRepository;
use calendario::domain::ports::worked_time_repository::WorkedTimeRepository;
use chrono::{NaiveDate, Utc};
use helpers::*;

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, d).unwrap()
}

#[tokio::test]
async fn test_holidays_without_scope_or_label_read_back() {
    let db = setup_test_db().await;

    let regional = DayEntry {
        scope: Some("ES-MD".to_string()),
        ..DayEntry::new(date(5, 2), DayKind::FestivoLocal, Some("Dos de Mayo".to_string()), false)
    };
    let holidays = vec![
        DayEntry::new(date(1, 1), DayKind::FestivoNacional, Some("Año Nuevo".to_string()), false),
        DayEntry::new(date(1, 6), DayKind::FestivoNacional, None, false),
        regional.clone(),
    ];
    db.store_holiday_year("ES", 2025, &holidays).await.unwrap();

    let stored = db
        .list_holidays_between("ES", date(1, 1), date(12, 31))
        .await
        .unwrap();

    assert_eq!(stored, holidays);
    assert_eq!(stored[0].scope, None);
    assert_eq!(stored[1].label, None);
    assert_eq!(stored[2], regional);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_unreverted_import_with_unlabeled_entries_reads_back() {
    let db = setup_test_db().await;

    let import = CalendarImport::new(
        "scan.png".to_string(),
        vec![
            DayEntry::new(date(4, 17), DayKind::CierreEmpresa, None, false),
            DayEntry::new(date(12, 24), DayKind::Convenio, Some("Nochebuena".to_string()), true),
        ],
    );
    db.save_import(&import).await.unwrap();

    let loaded = db.get_import(&import.id).await.unwrap().unwrap();
    assert_eq!(loaded.reverted_at, None);
    assert_eq!(loaded.entries, import.entries);
    assert_eq!(loaded.entries[0].label, None);
    assert!(loaded.entries[1].is_laborable);

    let listed = db.list_imports().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].reverted_at, None);
    assert_eq!(listed[0].entry_count, 2);

    let active = db.active_entries_between(date(1, 1), date(12, 31)).await.unwrap();
    assert_eq!(active, import.entries);

    assert!(db.mark_reverted(&import.id, Utc::now()).await.unwrap());
    let reverted = db.get_import(&import.id).await.unwrap().unwrap();
    assert!(reverted.reverted_at.is_some());

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_company_day_without_label_reads_back() {
    let db = setup_test_db().await;

    let entry = DayEntry::new(date(8, 14), DayKind::CierreEmpresa, None, false);
    db.upsert_company_day(&entry).await.unwrap();

    let days = db.list_company_days_between(date(8, 1), date(8, 31)).await.unwrap();
    assert_eq!(days, vec![entry]);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_open_clock_entry_counts_zero() {
    let db = setup_test_db().await;
    insert_clock_entry(&db, "emp-1", "2025-03-03T08:00:00", Some("2025-03-03T14:30:00")).await;
    insert_clock_entry(&db, "emp-1", "2025-03-04T08:00:00", None).await;

    let markers = db
        .worked_time_between("emp-1", date(3, 1), date(3, 31))
        .await
        .unwrap();

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].minutes, 390.0);
    assert_eq!(markers[1].date, date(3, 4));
    assert_eq!(markers[1].minutes, 0.0);

    teardown_test_db(db).await;
}
