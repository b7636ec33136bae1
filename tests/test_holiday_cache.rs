mod helpers;

use calendario::application::services::HolidayCacheService;
use calendario::domain::entities::DayKind;
use calendario::domain::errors::HolidayError;
use calendario::domain::ports::holiday_repository::HolidayRepository;
use calendario::domain::ports::holiday_source::HolidaySource;
use helpers::*;
use std::sync::Arc;
use std::time::Duration;

fn cache_over(db: &calendario::infrastructure::persistence::Database, source: Arc<StubHolidaySource>) -> HolidayCacheService {
    HolidayCacheService::new(
        Arc::new(db.clone()) as Arc<dyn HolidayRepository>,
        source as Arc<dyn HolidaySource>,
        "ES",
    )
}

#[tokio::test]
async fn test_ensure_year_fetches_once() {
    let db = setup_test_db().await;
    let source = Arc::new(StubHolidaySource::new(spanish_holidays_2025()));
    let cache = cache_over(&db, source.clone());
    assert_eq!(cache.country(), "ES");

    let first = cache.ensure_year(2025).await.unwrap();
    assert!(first.imported);
    assert_eq!(first.count, 4);
    let stored_after_first = cache.list_year(2025).await.unwrap();

    let second = cache.ensure_year(2025).await.unwrap();
    assert!(!second.imported);
    assert_eq!(source.calls(), 1);

    // Second call leaves the stored data untouched
    assert_eq!(cache.list_year(2025).await.unwrap(), stored_after_first);
    assert_eq!(count_rows(&db, "holidays").await, 4);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_stored_holidays_are_normalized() {
    let db = setup_test_db().await;
    let source = Arc::new(StubHolidaySource::new(spanish_holidays_2025()));
    let cache = cache_over(&db, source);

    cache.ensure_year(2025).await.unwrap();
    let holidays = cache.list_year(2025).await.unwrap();

    assert_eq!(holidays.len(), 4);
    assert_eq!(holidays[0].kind, DayKind::FestivoNacional);
    assert_eq!(holidays[0].label.as_deref(), Some("Año Nuevo"));
    assert!(!holidays[0].is_laborable);
    assert_eq!(holidays[3].kind, DayKind::FestivoLocal);
    assert_eq!(holidays[3].scope.as_deref(), Some("ES-MD"));

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_year_without_holidays_is_not_refetched() {
    let db = setup_test_db().await;
    let source = Arc::new(StubHolidaySource::new(Vec::new()));
    let cache = cache_over(&db, source.clone());

    let outcome = cache.ensure_year(2031).await.unwrap();
    assert!(outcome.imported);
    assert_eq!(outcome.count, 0);

    cache.ensure_year(2031).await.unwrap();
    assert_eq!(source.calls(), 1);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_concurrent_first_calls_fetch_once() {
    let db = setup_test_db().await;
    let source = Arc::new(StubHolidaySource::new(spanish_holidays_2025()).with_delay(Duration::from_millis(50)));
    let cache = cache_over(&db, source.clone());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.ensure_year(2025).await })
        })
        .collect();

    let mut imported = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().imported {
            imported += 1;
        }
    }

    assert_eq!(imported, 1);
    assert_eq!(source.calls(), 1);
    assert_eq!(count_rows(&db, "holidays").await, 4);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_failed_fetch_leaves_year_uncached() {
    let db = setup_test_db().await;
    let source = Arc::new(StubHolidaySource::failing());
    let cache = cache_over(&db, source.clone());

    let result = cache.ensure_year(2025).await;
    assert!(matches!(result, Err(HolidayError::Fetch(_))));
    assert!(cache.list_year(2025).await.unwrap().is_empty());

    // The provider comes back: the next call retries
    source.replace_holidays(spanish_holidays_2025());
    source.set_failing(false);
    let outcome = cache.ensure_year(2025).await.unwrap();
    assert!(outcome.imported);
    assert_eq!(source.calls(), 2);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_refresh_year_upserts_changes() {
    let db = setup_test_db().await;
    let source = Arc::new(StubHolidaySource::new(spanish_holidays_2025()));
    let cache = cache_over(&db, source.clone());

    cache.ensure_year(2025).await.unwrap();

    let mut updated = spanish_holidays_2025();
    updated[0].local_name = "Año Nuevo (revisado)".to_string();
    source.replace_holidays(updated);

    let outcome = cache.refresh_year(2025).await.unwrap();
    assert!(outcome.imported);
    assert_eq!(source.calls(), 2);

    let holidays = cache.list_year(2025).await.unwrap();
    assert_eq!(holidays.len(), 4);
    assert_eq!(holidays[0].label.as_deref(), Some("Año Nuevo (revisado)"));
    assert_eq!(count_rows(&db, "holidays").await, 4);

    teardown_test_db(db).await;
}

#[tokio::test]
async fn test_year_marker_records_count() {
    let db = setup_test_db().await;
    let source = Arc::new(StubHolidaySource::new(spanish_holidays_2025()));
    let cache = cache_over(&db, source);

    assert!(db.get_holiday_year("ES", 2025).await.unwrap().is_none());
    cache.ensure_year(2025).await.unwrap();

    let marker = db.get_holiday_year("ES", 2025).await.unwrap().unwrap();
    assert_eq!(marker.year, 2025);
    assert_eq!(marker.holiday_count, 4);

    teardown_test_db(db).await;
}
