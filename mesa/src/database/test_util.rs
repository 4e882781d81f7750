//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::{parse_time, NewReservation, ReservationDraft};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Builds a validated reservation for 2024-05-10 at `time` (`HH:MM`).
///
/// # Panics
///
/// Panics if the inputs do not validate.
#[must_use]
pub fn sample_draft(name: &str, time: &str, party_size: u32) -> NewReservation {
    ReservationDraft::new(
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        parse_time("time", time).unwrap(),
        name,
        "11 98888-7777",
        party_size,
    )
    .validate()
    .unwrap()
}
