//! In-process reservation store.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::{NewReservation, Reservation, ReservationId, ReservationUpdate};

use super::ReservationStore;

/// A reservation store backed by a `Vec`.
///
/// Ids are assigned from a counter that only moves forward, so an id is
/// never handed out twice by the same store. Once `i64::MAX` has been
/// used the counter is spent and further appends fail.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    reservations: Vec<Reservation>,
    next_id: Option<i64>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reservations: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Creates a store seeded with existing reservations.
    ///
    /// The id counter starts after the largest numeric id present.
    #[must_use]
    pub fn with_reservations(reservations: Vec<Reservation>) -> Self {
        let next_id = reservations
            .iter()
            .filter_map(|r| r.id().as_str().parse::<i64>().ok())
            .max()
            .map_or(Some(1), |max| max.max(0).checked_add(1));
        Self {
            reservations,
            next_id,
        }
    }

    /// Returns every stored reservation in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns the number of stored reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns true when the store holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

impl ReservationStore for MemoryStore {
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.date() == date)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        Ok(self.reservations.iter().find(|r| r.id() == id).cloned())
    }

    fn append(&mut self, reservation: NewReservation) -> Result<Reservation> {
        let next = self.next_id.ok_or_else(|| Error::Validation {
            field: "id".into(),
            message: "reservation ids exhausted".into(),
        })?;
        self.next_id = next.checked_add(1);
        let id = ReservationId::from(next);

        let stored = reservation.into_reservation(id);
        self.reservations.push(stored.clone());
        Ok(stored)
    }

    fn update_by_id(&mut self, id: &ReservationId, update: &ReservationUpdate) -> Result<bool> {
        let Some(existing) = self.reservations.iter_mut().find(|r| r.id() == id) else {
            return Ok(false);
        };
        update.apply_to(existing)?;
        Ok(true)
    }
}
