//! Daily dashboard aggregation.
//!
//! The dashboard is derived on demand from one date slice of the store and
//! is never persisted.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::ReservationStore;
use crate::{Reservation, ReservationStatus};

/// Summary metrics for one date.
///
/// Cancelled reservations count toward `total_reservations` only.
///
/// # Examples
///
/// ```
/// use mesa::DashboardData;
///
/// let empty = DashboardData::from_reservations(&[]);
/// assert_eq!(empty, DashboardData::default());
/// assert_eq!(empty.total_confirmed_revenue.to_string(), "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    /// Every reservation for the date, whatever its status.
    pub total_reservations: usize,
    /// Reservations whose payment was confirmed.
    pub total_confirmed: usize,
    /// Sum of `amount_due` over confirmed reservations.
    pub total_confirmed_revenue: Decimal,
    /// Reservations still awaiting payment.
    pub total_pending: usize,
}

impl DashboardData {
    /// Aggregates a date slice.
    #[must_use]
    pub fn from_reservations(reservations: &[Reservation]) -> Self {
        reservations
            .iter()
            .fold(Self::default(), |mut acc, reservation| {
                acc.total_reservations += 1;
                match reservation.status() {
                    ReservationStatus::Confirmed => {
                        acc.total_confirmed += 1;
                        acc.total_confirmed_revenue += reservation.amount_due();
                    }
                    ReservationStatus::Pending => acc.total_pending += 1,
                    ReservationStatus::Cancelled => {}
                }
                acc
            })
    }

    /// Returns the confirmed revenue rounded to cents for display.
    #[must_use]
    pub fn revenue_display(&self) -> String {
        let mut rounded = self.total_confirmed_revenue.round_dp(2);
        rounded.rescale(2);
        rounded.to_string()
    }
}

impl fmt::Display for DashboardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} reservations, {} confirmed ({}), {} pending",
            self.total_reservations,
            self.total_confirmed,
            self.revenue_display(),
            self.total_pending
        )
    }
}

/// Summarizes a date, propagating store failures.
///
/// # Errors
///
/// Returns an error if the store cannot produce the date slice.
pub fn try_summarize<S>(store: &S, date: NaiveDate) -> Result<DashboardData>
where
    S: ReservationStore + ?Sized,
{
    store.dashboard(date)
}

/// Summarizes a date, degrading to an all-zero dashboard when the store
/// fails. The failure is logged.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mesa::store::MemoryStore;
///
/// let store = MemoryStore::new();
/// let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
/// assert_eq!(mesa::dashboard::summarize(&store, date).total_reservations, 0);
/// ```
#[must_use]
pub fn summarize<S>(store: &S, date: NaiveDate) -> DashboardData
where
    S: ReservationStore + ?Sized,
{
    try_summarize(store, date).unwrap_or_else(|e| {
        log::error!("failed to summarize reservations for {date}: {e}");
        DashboardData::default()
    })
}
