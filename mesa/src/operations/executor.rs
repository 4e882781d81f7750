//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to a reservation store.

use crate::error::Result;
use crate::reservation::{Reservation, ReservationId};
use crate::store::ReservationStore;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether every action was applied by the store.
    ///
    /// A confirmation the store reports as not applied (unknown id) makes
    /// this `false`; later actions are then skipped.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The reservation appended by the plan, as stored.
    pub created: Option<Reservation>,

    /// Ids of reservations the store confirmed.
    pub confirmed: Vec<ReservationId>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: Vec::new(),
            warnings: plan.warnings.clone(),
            created: None,
            confirmed: Vec::new(),
        }
    }
}

/// Executes operation plans against a store.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (reporting the actions without touching the store).
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use mesa::operations::{OperationPlan, PlanAction, PlanExecutor};
/// use mesa::store::MemoryStore;
/// use mesa::ReservationDraft;
///
/// let mut store = MemoryStore::new();
/// let new = ReservationDraft::new(
///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
///     NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
///     "Maria",
///     "11 5555-0000",
///     2,
/// )
/// .validate()
/// .unwrap();
/// let plan = OperationPlan::new("Create").add_action(PlanAction::AppendReservation(new));
///
/// let result = PlanExecutor::new(&mut store).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert!(store.is_empty());
///
/// let result = PlanExecutor::new(&mut store).execute(&plan).unwrap();
/// assert_eq!(result.created.unwrap().id().as_str(), "1");
/// ```
pub struct PlanExecutor<'a, S: ReservationStore + ?Sized> {
    store: &'a mut S,
    dry_run: bool,
}

impl<'a, S: ReservationStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// If in dry-run mode, reports the plan but makes no store calls.
    /// Otherwise, applies the actions in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any store call fails. Actions already applied
    /// stay applied.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::new(plan, self.dry_run);

        if self.dry_run {
            result.actions_taken = plan.actions.iter().map(PlanAction::description).collect();
            return Ok(result);
        }

        for action in &plan.actions {
            let applied = self.execute_action(action, &mut result)?;
            result.actions_taken.push(action.description());
            if !applied {
                log::warn!("store did not apply: {}", action.description());
                result.success = false;
                break;
            }
        }

        Ok(result)
    }

    /// Executes a single action, returning whether the store applied it.
    fn execute_action(&mut self, action: &PlanAction, result: &mut ExecutionResult) -> Result<bool> {
        match action {
            PlanAction::AppendReservation(reservation) => {
                let stored = self.store.append(reservation.clone())?;
                log::debug!("created reservation {}", stored.id());
                result.created = Some(stored);
                Ok(true)
            }
            PlanAction::ConfirmReservation { id, update } => {
                let applied = self.store.update_by_id(id, update)?;
                if applied {
                    result.confirmed.push(id.clone());
                }
                Ok(applied)
            }
        }
    }
}
