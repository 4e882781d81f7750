//! Storage abstraction for reservations.
//!
//! The [`ReservationStore`] trait is the only way the lifecycle manager and
//! the dashboard touch persisted reservations. Three backends implement it:
//!
//! - [`Database`](crate::database::Database): a local `SQLite` file
//! - [`RemoteStore`]: an HTTP endpoint speaking the `action` protocol
//! - [`MemoryStore`]: an in-process list, for tests and throwaway books
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use mesa::store::{MemoryStore, ReservationStore};
//! use mesa::ReservationDraft;
//!
//! let mut store = MemoryStore::new();
//! let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
//! let draft = ReservationDraft::new(
//!     date,
//!     NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
//!     "Maria",
//!     "11 5555-0000",
//!     2,
//! );
//!
//! let stored = store.append(draft.validate().unwrap()).unwrap();
//! assert_eq!(store.list_by_date(date).unwrap(), vec![stored]);
//! ```

mod memory;
pub mod remote;

use chrono::NaiveDate;

use crate::dashboard::DashboardData;
use crate::error::Result;
use crate::{NewReservation, Reservation, ReservationId, ReservationUpdate};

pub use memory::MemoryStore;
pub use remote::RemoteStore;

/// Persistence collaborator for reservations.
///
/// Implementations own the durable collection. Callers must not assume any
/// ordering of `list_by_date` results.
pub trait ReservationStore {
    /// Returns every reservation whose date equals `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read.
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>>;

    /// Looks up one reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium cannot be read, or
    /// [`Error::Unsupported`](crate::Error::Unsupported) if the backend has no
    /// way to resolve the id on its own.
    fn get_by_id(&self, id: &ReservationId) -> Result<Option<Reservation>>;

    /// Persists a new reservation under a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn append(&mut self, reservation: NewReservation) -> Result<Reservation>;

    /// Applies `update` to the reservation with the given id.
    ///
    /// Returns `Ok(false)` without writing when no such reservation exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the update is rejected by the
    /// reservation invariants.
    fn update_by_id(&mut self, id: &ReservationId, update: &ReservationUpdate) -> Result<bool>;

    /// Aggregates the dashboard for a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date slice cannot be read.
    fn dashboard(&self, date: NaiveDate) -> Result<DashboardData> {
        Ok(DashboardData::from_reservations(&self.list_by_date(date)?))
    }
}

impl<S: ReservationStore + ?Sized> ReservationStore for Box<S> {
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
        (**self).list_by_date(date)
    }

    fn get_by_id(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        (**self).get_by_id(id)
    }

    fn append(&mut self, reservation: NewReservation) -> Result<Reservation> {
        (**self).append(reservation)
    }

    fn update_by_id(&mut self, id: &ReservationId, update: &ReservationUpdate) -> Result<bool> {
        (**self).update_by_id(id, update)
    }

    fn dashboard(&self, date: NaiveDate) -> Result<DashboardData> {
        (**self).dashboard(date)
    }
}
