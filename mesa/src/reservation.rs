//! Reservation types for tracking restaurant bookings.
//!
//! This module provides the reservation record, its status lifecycle values,
//! the confirmation sub-record, and the draft/builder types used to construct
//! reservations with validated invariants.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::locator::ConfirmationCode;

#[cfg(test)]
mod proptests;

/// Price charged per guest when a reservation is created.
///
/// ```
/// use mesa::reservation::UNIT_PRICE;
///
/// assert_eq!(UNIT_PRICE.to_string(), "10.00");
/// ```
pub const UNIT_PRICE: Decimal = Decimal::from_parts(1000, 0, 0, false, 2);

/// Computes the amount due for a party of the given size.
///
/// # Examples
///
/// ```
/// use mesa::reservation::amount_for_party;
///
/// assert_eq!(amount_for_party(3).to_string(), "30.00");
/// ```
#[must_use]
pub fn amount_for_party(party_size: u32) -> Decimal {
    UNIT_PRICE * Decimal::from(party_size)
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns a validation error naming `field` if the text is not a valid date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| ValidationError {
        field: field.into(),
        message: format!("expected YYYY-MM-DD, got '{value}': {e}"),
    })
}

/// Parses a time of day in `HH:MM` form. Seconds are accepted and dropped.
///
/// # Errors
///
/// Returns a validation error naming `field` if the text is not a valid time.
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(truncate_to_minute)
        .map_err(|e| ValidationError {
            field: field.into(),
            message: format!("expected HH:MM, got '{value}': {e}"),
        })
}

/// Drops seconds and fractions. Reservations are kept to the minute.
///
/// ```
/// use chrono::NaiveTime;
/// use mesa::reservation::truncate_to_minute;
///
/// let time = NaiveTime::from_hms_opt(19, 0, 30).unwrap();
/// assert_eq!(truncate_to_minute(time), NaiveTime::from_hms_opt(19, 0, 0).unwrap());
/// ```
#[must_use]
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Opaque identifier assigned by the store when a reservation is appended.
///
/// Identifiers are held as text. Remote endpoints may send them as JSON
/// numbers, which are accepted and converted.
///
/// # Examples
///
/// ```
/// use mesa::ReservationId;
///
/// let id = ReservationId::from(42);
/// assert_eq!(id.as_str(), "42");
///
/// let parsed: ReservationId = serde_json::from_str("1718000000000").unwrap();
/// assert_eq!(parsed.as_str(), "1718000000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReservationId(String);

impl ReservationId {
    /// Creates an identifier from text.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty after trimming whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "id".into(),
                message: "id must be non-empty".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for ReservationId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for ReservationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ReservationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ReservationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Number(i64),
            Text(String),
        }

        match Helper::deserialize(deserializer)? {
            Helper::Number(n) => Ok(Self::from(n)),
            Helper::Text(s) => Self::new(s).map_err(D::Error::custom),
        }
    }
}

/// Payment status of a reservation.
///
/// The lifecycle only ever moves `Pending` to `Confirmed`. `Cancelled` is a
/// terminal value that can be read back from a store but is never produced
/// by this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    /// Awaiting payment confirmation.
    Pending,
    /// Payment received and confirmed by staff.
    Confirmed,
    /// Cancelled; counts toward the day's total only.
    Cancelled,
}

impl ReservationStatus {
    /// Returns the canonical upper-case name of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Checks whether the lifecycle allows moving from `self` to `next`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesa::ReservationStatus;
    ///
    /// assert!(ReservationStatus::Pending.can_transition_to(ReservationStatus::Confirmed));
    /// assert!(!ReservationStatus::Confirmed.can_transition_to(ReservationStatus::Pending));
    /// assert!(!ReservationStatus::Cancelled.can_transition_to(ReservationStatus::Confirmed));
    /// ```
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::Pending, Self::Confirmed))
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown status '{s}'"),
            }),
        }
    }
}

/// Who confirmed a payment, when, and the locator code issued for it.
///
/// The three values only ever exist together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    confirmed_at: DateTime<Utc>,
    confirmed_by: String,
    code: ConfirmationCode,
}

impl Confirmation {
    /// Creates a confirmation record.
    ///
    /// # Errors
    ///
    /// Returns an error if `confirmed_by` is empty after trimming whitespace.
    pub fn new(
        confirmed_by: impl Into<String>,
        code: ConfirmationCode,
        confirmed_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let confirmed_by = confirmed_by.into().trim().to_string();
        if confirmed_by.is_empty() {
            return Err(ValidationError {
                field: "confirmed_by".into(),
                message: "confirming principal must be non-empty".into(),
            });
        }
        Ok(Self {
            confirmed_at,
            confirmed_by,
            code,
        })
    }

    /// Returns when the payment was confirmed.
    #[must_use]
    pub const fn confirmed_at(&self) -> DateTime<Utc> {
        self.confirmed_at
    }

    /// Returns the staff principal who confirmed the payment.
    #[must_use]
    pub fn confirmed_by(&self) -> &str {
        &self.confirmed_by
    }

    /// Returns the locator code issued at confirmation.
    #[must_use]
    pub const fn code(&self) -> &ConfirmationCode {
        &self.code
    }
}

/// Caller-supplied input for creating a reservation.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use mesa::ReservationDraft;
///
/// let draft = ReservationDraft::new(
///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
///     "Maria Souza",
///     "(11) 98888-7777",
///     4,
/// )
/// .note(Some("window seat".to_string()));
///
/// let new = draft.validate().unwrap();
/// assert_eq!(new.amount_due().to_string(), "40.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    date: NaiveDate,
    time: NaiveTime,
    customer_name: String,
    phone: String,
    party_size: u32,
    note: Option<String>,
}

impl ReservationDraft {
    /// Creates a draft with the required fields.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        customer_name: impl Into<String>,
        phone: impl Into<String>,
        party_size: u32,
    ) -> Self {
        Self {
            date,
            time,
            customer_name: customer_name.into(),
            phone: phone.into(),
            party_size,
            note: None,
        }
    }

    /// Sets the optional note. Blank notes are dropped.
    #[must_use]
    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Validates the draft and computes the amount due.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `party_size` is zero
    /// - `customer_name` or `phone` is empty after trimming
    pub fn validate(self) -> Result<NewReservation, ValidationError> {
        let customer_name = require_text("customer_name", &self.customer_name)?;
        let phone = require_text("phone", &self.phone)?;
        validate_party_size(self.party_size)?;

        Ok(NewReservation {
            date: self.date,
            time: truncate_to_minute(self.time),
            customer_name,
            phone,
            party_size: self.party_size,
            note: normalize_note(self.note),
            amount_due: amount_for_party(self.party_size),
        })
    }
}

/// A validated reservation that has not been assigned an id yet.
///
/// Its status is implicitly `PENDING` and it carries no confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    date: NaiveDate,
    time: NaiveTime,
    customer_name: String,
    phone: String,
    party_size: u32,
    note: Option<String>,
    amount_due: Decimal,
}

impl NewReservation {
    /// Returns the reservation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the reservation time.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the customer phone.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the party size.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Returns the optional note.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the amount due.
    #[must_use]
    pub const fn amount_due(&self) -> Decimal {
        self.amount_due
    }

    /// Attaches a store-assigned id, producing a pending reservation.
    #[must_use]
    pub fn into_reservation(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            date: self.date,
            time: self.time,
            customer_name: self.customer_name,
            phone: self.phone,
            party_size: self.party_size,
            note: self.note,
            status: ReservationStatus::Pending,
            amount_due: self.amount_due,
            confirmation: None,
        }
    }
}

/// A stored reservation.
///
/// Every field except `status` and `confirmation` is fixed at creation.
/// The builder and [`ReservationUpdate`] are the only ways to obtain or
/// change one, and both check the invariants:
///
/// - `amount_due == party_size * UNIT_PRICE`
/// - `PENDING` carries no confirmation, `CONFIRMED` always carries one
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use mesa::{Reservation, ReservationId, ReservationStatus};
///
/// let reservation = Reservation::builder(
///     ReservationId::from(1),
///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
/// )
/// .customer_name("João Silva")
/// .phone("(11) 91234-5678")
/// .party_size(2)
/// .build()
/// .unwrap();
///
/// assert_eq!(reservation.status(), ReservationStatus::Pending);
/// assert_eq!(reservation.amount_due().to_string(), "20.00");
/// assert!(reservation.confirmation().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReservationRecord")]
pub struct Reservation {
    id: ReservationId,
    date: NaiveDate,
    #[serde(with = "hhmm")]
    time: NaiveTime,
    customer_name: String,
    phone: String,
    party_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    status: ReservationStatus,
    amount_due: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    confirmation: Option<Confirmation>,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(id: ReservationId, date: NaiveDate, time: NaiveTime) -> ReservationBuilder {
        ReservationBuilder {
            id,
            date,
            time,
            customer_name: String::new(),
            phone: String::new(),
            party_size: 1,
            note: None,
            status: ReservationStatus::Pending,
            amount_due: None,
            confirmation: None,
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Returns the reservation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the reservation time.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the customer phone as entered.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the party size.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Returns the optional note.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the payment status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the amount due.
    #[must_use]
    pub const fn amount_due(&self) -> Decimal {
        self.amount_due
    }

    /// Returns the confirmation record, if the payment was confirmed.
    #[must_use]
    pub const fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Returns the locator code, if one was issued.
    #[must_use]
    pub fn confirmation_code(&self) -> Option<&ConfirmationCode> {
        self.confirmation.as_ref().map(Confirmation::code)
    }
}

/// Wire shape of a [`Reservation`]. Decoding goes through the builder so a
/// payload cannot bypass the invariants.
#[derive(Deserialize)]
struct ReservationRecord {
    id: ReservationId,
    date: NaiveDate,
    #[serde(with = "hhmm")]
    time: NaiveTime,
    customer_name: String,
    phone: String,
    party_size: u32,
    #[serde(default)]
    note: Option<String>,
    status: ReservationStatus,
    amount_due: Decimal,
    #[serde(default)]
    confirmation: Option<Confirmation>,
}

impl TryFrom<ReservationRecord> for Reservation {
    type Error = ValidationError;

    fn try_from(record: ReservationRecord) -> Result<Self, Self::Error> {
        Reservation::builder(record.id, record.date, record.time)
            .customer_name(record.customer_name)
            .phone(record.phone)
            .party_size(record.party_size)
            .note(record.note)
            .status(record.status)
            .amount_due(record.amount_due)
            .confirmation(record.confirmation)
            .build()
    }
}

/// Builder for reconstructing `Reservation` instances from storage.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: ReservationId,
    date: NaiveDate,
    time: NaiveTime,
    customer_name: String,
    phone: String,
    party_size: u32,
    note: Option<String>,
    status: ReservationStatus,
    amount_due: Option<Decimal>,
    confirmation: Option<Confirmation>,
}

impl ReservationBuilder {
    /// Sets the customer name.
    #[must_use]
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    /// Sets the customer phone.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the party size.
    #[must_use]
    pub const fn party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    /// Sets the optional note.
    #[must_use]
    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the stored amount. When absent, the amount is derived from the
    /// party size; when present, it must agree with it.
    #[must_use]
    pub const fn amount_due(mut self, amount: Decimal) -> Self {
        self.amount_due = Some(amount);
        self
    }

    /// Sets the confirmation record.
    #[must_use]
    pub fn confirmation(mut self, confirmation: Option<Confirmation>) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `customer_name` or `phone` is empty after trimming
    /// - `party_size` is zero
    /// - the stored amount differs from `party_size * UNIT_PRICE`
    /// - status and confirmation disagree
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let customer_name = require_text("customer_name", &self.customer_name)?;
        let phone = require_text("phone", &self.phone)?;
        validate_party_size(self.party_size)?;

        let expected = amount_for_party(self.party_size);
        if let Some(amount) = self.amount_due {
            if amount != expected {
                return Err(ValidationError {
                    field: "amount_due".into(),
                    message: format!(
                        "amount {amount} does not match {} guest(s) at {UNIT_PRICE}",
                        self.party_size
                    ),
                });
            }
        }

        check_confirmation(self.status, self.confirmation.as_ref())?;

        Ok(Reservation {
            id: self.id,
            date: self.date,
            time: truncate_to_minute(self.time),
            customer_name,
            phone,
            party_size: self.party_size,
            note: normalize_note(self.note),
            status: self.status,
            amount_due: self.amount_due.unwrap_or(expected),
            confirmation: self.confirmation,
        })
    }
}

/// Field changes applied to a stored reservation by `update_by_id`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use mesa::{Confirmation, ConfirmationCode, ReservationStatus, ReservationUpdate};
///
/// let code = ConfirmationCode::parse("4821").unwrap();
/// let confirmation = Confirmation::new("staff@mesa.test", code, Utc::now()).unwrap();
/// let update = ReservationUpdate::confirm(confirmation);
/// assert_eq!(update.status, Some(ReservationStatus::Confirmed));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationUpdate {
    /// New status, if it changes.
    pub status: Option<ReservationStatus>,
    /// Confirmation record to attach, if any.
    pub confirmation: Option<Confirmation>,
}

impl ReservationUpdate {
    /// Builds the update that marks a payment as confirmed.
    #[must_use]
    pub fn confirm(confirmation: Confirmation) -> Self {
        Self {
            status: Some(ReservationStatus::Confirmed),
            confirmation: Some(confirmation),
        }
    }

    /// Applies the update to a reservation in place.
    ///
    /// The reservation is left untouched when the update is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the reservation already carries a confirmation and the update brings another
    /// - the status change is not a lifecycle transition
    /// - the resulting status and confirmation disagree
    pub fn apply_to(&self, reservation: &mut Reservation) -> Result<(), ValidationError> {
        if self.confirmation.is_some() && reservation.confirmation.is_some() {
            return Err(ValidationError {
                field: "confirmation".into(),
                message: format!("reservation {} is already confirmed", reservation.id),
            });
        }
        if let Some(next) = self.status {
            if next != reservation.status && !reservation.status.can_transition_to(next) {
                return Err(ValidationError {
                    field: "status".into(),
                    message: format!(
                        "reservation {} cannot move from {} to {next}",
                        reservation.id, reservation.status
                    ),
                });
            }
        }

        let status = self.status.unwrap_or(reservation.status);
        let confirmation = self
            .confirmation
            .as_ref()
            .or(reservation.confirmation.as_ref());
        check_confirmation(status, confirmation)?;

        reservation.status = status;
        if let Some(ref confirmation) = self.confirmation {
            reservation.confirmation = Some(confirmation.clone());
        }
        Ok(())
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

fn require_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: format!("{field} must be non-empty after trimming whitespace"),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_party_size(party_size: u32) -> Result<(), ValidationError> {
    if party_size == 0 {
        return Err(ValidationError {
            field: "party_size".into(),
            message: "party size must be at least 1".into(),
        });
    }
    Ok(())
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

fn check_confirmation(
    status: ReservationStatus,
    confirmation: Option<&Confirmation>,
) -> Result<(), ValidationError> {
    match (status, confirmation) {
        (ReservationStatus::Pending, Some(_)) => Err(ValidationError {
            field: "confirmation".into(),
            message: "a pending reservation cannot carry a confirmation".into(),
        }),
        (ReservationStatus::Confirmed, None) => Err(ValidationError {
            field: "confirmation".into(),
            message: "a confirmed reservation must carry a confirmation".into(),
        }),
        _ => Ok(()),
    }
}

/// Serde helper that writes times as `HH:MM` and reads `HH:MM[:SS]`.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_time("time", &text).map_err(serde::de::Error::custom)
    }
}
