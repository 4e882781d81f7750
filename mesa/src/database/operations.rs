//! Reservation reads and writes against `SQLite`.
//!
//! Writes run in IMMEDIATE transactions so a confirmation reads and
//! rewrites its row without another writer slipping in between.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, TransactionBehavior};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::locator::ConfirmationCode;
use crate::reservation::{
    parse_date, parse_time, Confirmation, NewReservation, Reservation, ReservationId,
    ReservationStatus, ReservationUpdate,
};
use crate::store::ReservationStore;

use super::connection::{classify, Database};
use super::schema::{INSERT_RESERVATION, RESERVATION_COLUMNS, UPDATE_RESERVATION_STATUS};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Raw column values of one reservation row.
///
/// Kept separate from [`Reservation`] so that rows breaking an invariant
/// surface as corruption instead of a generic conversion failure.
struct StoredRow {
    id: i64,
    date: String,
    time: String,
    customer_name: String,
    phone: String,
    party_size: i64,
    note: Option<String>,
    status: String,
    amount_due: String,
    confirmed_at: Option<String>,
    confirmed_by: Option<String>,
    confirmation_code: Option<String>,
}

impl StoredRow {
    /// Reads a row selected with [`RESERVATION_COLUMNS`].
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            time: row.get(2)?,
            customer_name: row.get(3)?,
            phone: row.get(4)?,
            party_size: row.get(5)?,
            note: row.get(6)?,
            status: row.get(7)?,
            amount_due: row.get(8)?,
            confirmed_at: row.get(9)?,
            confirmed_by: row.get(10)?,
            confirmation_code: row.get(11)?,
        })
    }

    fn into_reservation(self) -> Result<Reservation> {
        let id = self.id;
        self.convert().map_err(|details| Error::DatabaseCorruption {
            details: format!("reservation {id}: {details}"),
        })
    }

    fn convert(self) -> std::result::Result<Reservation, String> {
        let date = parse_date("date", &self.date).map_err(|e| e.to_string())?;
        let time = parse_time("time", &self.time).map_err(|e| e.to_string())?;
        let party_size =
            u32::try_from(self.party_size).map_err(|_| format!("party size {}", self.party_size))?;
        let status: ReservationStatus = self.status.parse().map_err(|e| format!("{e}"))?;
        let amount_due: Decimal = self
            .amount_due
            .parse()
            .map_err(|e| format!("amount '{}': {e}", self.amount_due))?;

        let confirmation = match (self.confirmed_at, self.confirmed_by, self.confirmation_code) {
            (None, None, None) => None,
            (Some(at), Some(by), Some(code)) => {
                let at = DateTime::parse_from_rfc3339(&at)
                    .map_err(|e| format!("confirmed_at '{at}': {e}"))?
                    .with_timezone(&Utc);
                let code = ConfirmationCode::parse(&code).map_err(|e| e.to_string())?;
                Some(Confirmation::new(by, code, at).map_err(|e| e.to_string())?)
            }
            _ => return Err("partial confirmation columns".into()),
        };

        Reservation::builder(ReservationId::from(self.id), date, time)
            .customer_name(self.customer_name)
            .phone(self.phone)
            .party_size(party_size)
            .note(self.note)
            .status(status)
            .amount_due(amount_due)
            .confirmation(confirmation)
            .build()
            .map_err(|e| e.to_string())
    }
}

fn select_by_date() -> String {
    format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE date = ? ORDER BY time, id")
}

fn select_by_id() -> String {
    format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?")
}

/// Local ids are integers; anything else cannot name a stored row.
fn numeric_id(id: &ReservationId) -> Option<i64> {
    id.as_str().parse().ok()
}

impl ReservationStore for Database {
    fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(&select_by_date())?;
        let rows = stmt
            .query_map([date.format(DATE_FORMAT).to_string()], StoredRow::from_row)
            .map_err(|e| self.classify(e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| self.classify(e))?;
        rows.into_iter().map(StoredRow::into_reservation).collect()
    }

    fn get_by_id(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        let Some(key) = numeric_id(id) else {
            return Ok(None);
        };
        let row = self
            .conn
            .query_row(&select_by_id(), [key], StoredRow::from_row)
            .optional()
            .map_err(|e| self.classify(e))?;
        row.map(StoredRow::into_reservation).transpose()
    }

    fn append(&mut self, reservation: NewReservation) -> Result<Reservation> {
        let wait = self.config().busy_timeout;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| classify(e, wait))?;

        tx.execute(
            INSERT_RESERVATION,
            params![
                reservation.date().format(DATE_FORMAT).to_string(),
                reservation.time().format(TIME_FORMAT).to_string(),
                reservation.customer_name(),
                reservation.phone(),
                reservation.party_size(),
                reservation.note(),
                ReservationStatus::Pending.as_str(),
                reservation.amount_due().to_string(),
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        log::debug!("stored reservation {id} for {}", reservation.date());
        Ok(reservation.into_reservation(ReservationId::from(id)))
    }

    fn update_by_id(&mut self, id: &ReservationId, update: &ReservationUpdate) -> Result<bool> {
        let Some(key) = numeric_id(id) else {
            return Ok(false);
        };

        let wait = self.config().busy_timeout;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| classify(e, wait))?;

        let Some(row) = tx
            .query_row(&select_by_id(), [key], StoredRow::from_row)
            .optional()?
        else {
            return Ok(false);
        };

        let mut reservation = row.into_reservation()?;
        update.apply_to(&mut reservation)?;

        let confirmation = reservation.confirmation();
        tx.execute(
            UPDATE_RESERVATION_STATUS,
            params![
                reservation.status().as_str(),
                confirmation.map(|c| c.confirmed_at().to_rfc3339()),
                confirmation.map(Confirmation::confirmed_by),
                confirmation.map(|c| c.code().as_str()),
                key,
            ],
        )?;
        tx.commit()?;

        log::debug!("reservation {id} is now {}", reservation.status());
        Ok(true)
    }
}
