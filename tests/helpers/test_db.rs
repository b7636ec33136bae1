use calendario::domain::entities::{AbsenceStatus, AbsenceType};
use calendario::infrastructure::persistence::Database;

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // File-based SQLite, unique per test for parallel execution
    let temp_file = std::env::temp_dir().join(format!("calendario_test_{}.db", uuid::Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    db
}

pub async fn teardown_test_db(db: Database) {
    db.pool().close().await;
}

/// Insert an absence row the way the absence-request subsystem would
pub async fn insert_absence(
    db: &Database,
    employee_id: &str,
    absence_type: AbsenceType,
    start_date: &str,
    end_date: &str,
    status: AbsenceStatus,
) {
    let type_code = match absence_type {
        AbsenceType::Vacaciones => "vacaciones",
        AbsenceType::BajaMedica => "baja_medica",
    };

    sqlx::query(
        "INSERT INTO absences (id, employee_id, absence_type, start_date, end_date, status)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(uuid::Uuid::new_v4().to_string())
    .bind(employee_id.to_string())
    .bind(type_code.to_string())
    .bind(start_date.to_string())
    .bind(end_date.to_string())
    .bind(status.to_string())
    .execute(db.pool())
    .await
    .expect("Failed to insert absence");
}

/// Insert a time-clock row; timestamps are "YYYY-MM-DDTHH:MM:SS"
pub async fn insert_clock_entry(
    db: &Database,
    employee_id: &str,
    clock_in: &str,
    clock_out: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO clock_entries (id, employee_id, clock_in, clock_out)
         VALUES (?, ?, ?, ?)",
    )
    .bind(uuid::Uuid::new_v4().to_string())
    .bind(employee_id.to_string())
    .bind(clock_in.to_string())
    .bind(clock_out.map(str::to_string))
    .execute(db.pool())
    .await
    .expect("Failed to insert clock entry");
}

pub async fn count_rows(db: &Database, table: &str) -> i64 {
    let result: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(db.pool())
        .await
        .expect("Failed to count rows");
    result.0
}
