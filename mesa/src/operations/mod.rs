//! Reservation operations using the plan-execute pattern.
//!
//! Mutations are split into two phases:
//! 1. **Planning**: validates the request and decides which store calls
//!    are needed, producing an [`OperationPlan`]
//! 2. **Execution**: [`PlanExecutor`] performs those calls, or only reports
//!    them in dry-run mode
//!
//! [`ReservationLifecycle`] ties both phases together for callers that just
//! want a reservation created or a payment confirmed.
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use mesa::operations::{PlanExecutor, ReservationLifecycle};
//! use mesa::store::MemoryStore;
//! use mesa::ReservationDraft;
//!
//! let mut lifecycle = ReservationLifecycle::new(MemoryStore::new());
//! let draft = ReservationDraft::new(
//!     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
//!     NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
//!     "Joana",
//!     "21 4444-1111",
//!     3,
//! );
//!
//! // Generate plan
//! let plan = lifecycle.plan_create(draft).unwrap();
//!
//! // Execute plan
//! let mut store = lifecycle.into_store();
//! let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
//! assert_eq!(result.created.unwrap().amount_due().to_string(), "30.00");
//! ```

pub mod executor;
pub mod lifecycle;
pub mod plan;

#[cfg(test)]
mod proptests;

pub use executor::{ExecutionResult, PlanExecutor};
pub use lifecycle::{ConfirmOutcome, ConfirmPlan, ReservationLifecycle};
pub use plan::{OperationPlan, PlanAction};
