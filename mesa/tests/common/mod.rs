//! Common test utilities for integration tests.
//!
//! This module provides fixtures for building reservations and opening
//! throwaway databases, plus a store that fails every call.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use mesa::database::{Database, DatabaseConfig};
use mesa::error::{Error, Result};
use mesa::store::ReservationStore;
use mesa::{NewReservation, Reservation, ReservationDraft, ReservationId, ReservationUpdate};

/// The service day used throughout the tests.
#[allow(dead_code)]
pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

/// Parses an `HH:MM` literal.
#[allow(dead_code)]
pub fn at(time: &str) -> NaiveTime {
    NaiveTime::parse_from_str(time, "%H:%M").unwrap()
}

/// A draft for [`day`] with a fixed phone number.
#[allow(dead_code)]
pub fn draft(name: &str, time: &str, party_size: u32) -> ReservationDraft {
    ReservationDraft::new(day(), at(time), name, "(11) 91234-5678", party_size)
}

/// A validated reservation request for [`day`].
#[allow(dead_code)]
pub fn new_reservation(name: &str, time: &str, party_size: u32) -> NewReservation {
    draft(name, time, party_size).validate().unwrap()
}

/// Path of a database file inside `dir`.
#[allow(dead_code)]
pub fn db_path(dir: &Path) -> PathBuf {
    dir.join("mesa.db")
}

/// Opens (creating if needed) the database inside `dir`.
#[allow(dead_code)]
pub fn open_db(dir: &Path) -> Database {
    Database::open(DatabaseConfig::new(db_path(dir))).unwrap()
}

/// A store whose every call fails with an I/O error.
#[allow(dead_code)]
pub struct FailingStore;

impl FailingStore {
    fn fail<T>() -> Result<T> {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "store offline",
        )))
    }
}

impl ReservationStore for FailingStore {
    fn list_by_date(&self, _date: NaiveDate) -> Result<Vec<Reservation>> {
        Self::fail()
    }

    fn get_by_id(&self, _id: &ReservationId) -> Result<Option<Reservation>> {
        Self::fail()
    }

    fn append(&mut self, _reservation: NewReservation) -> Result<Reservation> {
        Self::fail()
    }

    fn update_by_id(&mut self, _id: &ReservationId, _update: &ReservationUpdate) -> Result<bool> {
        Self::fail()
    }
}
