//! `SQLite` storage for reservations.
//!
//! This module provides the local persisted backend behind
//! [`ReservationStore`](crate::store::ReservationStore): connection
//! management, schema versioning and the row mapping.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::{NaiveDate, NaiveTime};
//! use mesa::database::{Database, DatabaseConfig};
//! use mesa::store::ReservationStore;
//! use mesa::ReservationDraft;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/mesa.db")).unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
//! let draft = ReservationDraft::new(
//!     date,
//!     NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
//!     "Maria",
//!     "11 5555-0000",
//!     2,
//! );
//! db.append(draft.validate().unwrap()).unwrap();
//!
//! for reservation in db.list_by_date(date).unwrap() {
//!     println!("{} {}", reservation.id(), reservation.customer_name());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, DatabaseConfig, DATABASE_FILE_NAME, DEFAULT_BUSY_TIMEOUT};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
