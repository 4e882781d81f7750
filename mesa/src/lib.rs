#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # mesa
//!
//! A library for running a restaurant's reservation desk.
//!
//! Reservations are taken for a date and time, priced per guest, and move
//! from `PENDING` to `CONFIRMED` once staff confirm the PIX payment, at which
//! point a short locator code is issued.
//!
//! ## Core Types
//!
//! - [`Reservation`], [`ReservationDraft`] and [`ReservationStatus`]: the record and its lifecycle values
//! - [`store::ReservationStore`]: the persistence seam, with `SQLite`, HTTP and in-memory backends
//! - [`ReservationLifecycle`]: creation and payment confirmation
//! - [`DashboardData`] and [`search`]: per-day summaries and free-text filtering
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use mesa::store::MemoryStore;
//! use mesa::{ReservationDraft, ReservationLifecycle};
//!
//! let mut desk = ReservationLifecycle::new(MemoryStore::new());
//! let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
//! let reservation = desk
//!     .create_reservation(ReservationDraft::new(
//!         date,
//!         NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
//!         "João Silva",
//!         "(11) 91234-5678",
//!         4,
//!     ))
//!     .unwrap();
//! assert_eq!(reservation.amount_due().to_string(), "40.00");
//!
//! assert!(desk.confirm_payment(reservation.id(), "caixa@restaurante.test"));
//! assert_eq!(desk.dashboard(date).total_confirmed, 1);
//!
//! let day = desk.list_by_date(date);
//! assert_eq!(mesa::search::filter(&day, "joao").len(), 1);
//! ```

pub mod config;
pub mod dashboard;
pub mod database;
pub mod error;
pub mod locator;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod search;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use dashboard::DashboardData;
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use locator::{ConfirmationCode, LocatorGenerator};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    ConfirmOutcome, ConfirmPlan, ExecutionResult, OperationPlan, PlanAction, PlanExecutor,
    ReservationLifecycle,
};
pub use reservation::{
    Confirmation, NewReservation, Reservation, ReservationDraft, ReservationId, ReservationStatus,
    ReservationUpdate, ValidationError,
};
pub use store::ReservationStore;
