//! Reservation lifecycle: creation and payment confirmation.
//!
//! [`ReservationLifecycle`] owns the injected store and is the only place
//! that moves a reservation between statuses. Every mutation is planned
//! first and then applied through [`PlanExecutor`].

use std::fmt;

use chrono::{NaiveDate, Utc};

use crate::dashboard::{self, DashboardData};
use crate::error::{Error, Result};
use crate::locator::{ConfirmationCode, LocatorGenerator};
use crate::reservation::{
    Confirmation, Reservation, ReservationDraft, ReservationId, ReservationStatus,
    ReservationUpdate,
};
use crate::store::ReservationStore;

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// How a confirmation request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The payment was confirmed by this call.
    Confirmed {
        /// The reservation id.
        id: ReservationId,
        /// The confirmation that was written.
        confirmation: Confirmation,
    },
    /// The reservation was already confirmed; nothing was written.
    AlreadyConfirmed {
        /// The reservation id.
        id: ReservationId,
        /// The confirmation recorded the first time.
        confirmation: Confirmation,
    },
    /// The reservation is in a status that cannot be confirmed.
    NotConfirmable {
        /// The reservation id.
        id: ReservationId,
        /// Its current status.
        status: ReservationStatus,
    },
    /// The store has no reservation with this id.
    NotFound {
        /// The id that was looked up.
        id: ReservationId,
    },
}

impl ConfirmOutcome {
    /// Whether the reservation ends up confirmed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Confirmed { .. } | Self::AlreadyConfirmed { .. })
    }

    /// The locator code the reservation carries, if it is confirmed.
    #[must_use]
    pub const fn code(&self) -> Option<&ConfirmationCode> {
        match self {
            Self::Confirmed { confirmation, .. } | Self::AlreadyConfirmed { confirmation, .. } => {
                Some(confirmation.code())
            }
            Self::NotConfirmable { .. } | Self::NotFound { .. } => None,
        }
    }

    /// The reservation id the outcome refers to.
    #[must_use]
    pub const fn id(&self) -> &ReservationId {
        match self {
            Self::Confirmed { id, .. }
            | Self::AlreadyConfirmed { id, .. }
            | Self::NotConfirmable { id, .. }
            | Self::NotFound { id } => id,
        }
    }
}

impl fmt::Display for ConfirmOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed { id, confirmation } => write!(
                f,
                "reservation {id} confirmed by {} with code {}",
                confirmation.confirmed_by(),
                confirmation.code()
            ),
            Self::AlreadyConfirmed { id, confirmation } => write!(
                f,
                "reservation {id} was already confirmed with code {}",
                confirmation.code()
            ),
            Self::NotConfirmable { id, status } => {
                write!(f, "reservation {id} is {status} and cannot be confirmed")
            }
            Self::NotFound { id } => write!(f, "reservation {id} not found"),
        }
    }
}

/// The result of planning a confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmPlan {
    /// A write is needed; executing `plan` records `confirmation`.
    Write {
        /// The plan holding the single confirm action.
        plan: OperationPlan,
        /// The reservation id.
        id: ReservationId,
        /// The confirmation the plan will write.
        confirmation: Confirmation,
    },
    /// No write is needed; the outcome is already known.
    Settled(ConfirmOutcome),
}

/// Creates reservations and confirms their payments against a store.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use mesa::operations::ReservationLifecycle;
/// use mesa::store::MemoryStore;
/// use mesa::{ReservationDraft, ReservationStatus};
///
/// let mut lifecycle = ReservationLifecycle::new(MemoryStore::new());
/// let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
/// let created = lifecycle
///     .create_reservation(ReservationDraft::new(
///         date,
///         NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
///         "Maria",
///         "11 5555-0000",
///         2,
///     ))
///     .unwrap();
///
/// assert!(lifecycle.confirm_payment(created.id(), "staff@mesa.test"));
/// let listed = lifecycle.list_by_date(date);
/// assert_eq!(listed[0].status(), ReservationStatus::Confirmed);
/// ```
#[derive(Debug)]
pub struct ReservationLifecycle<S: ReservationStore> {
    store: S,
    locator: LocatorGenerator,
}

impl<S: ReservationStore> ReservationLifecycle<S> {
    /// Wraps a store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            locator: LocatorGenerator::new(),
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the lifecycle and returns the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validates a draft and plans its creation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the draft is invalid. The store is
    /// never consulted.
    pub fn plan_create(&self, draft: ReservationDraft) -> Result<OperationPlan> {
        let new = draft.validate()?;
        Ok(OperationPlan::new(format!(
            "Create reservation for {} on {}",
            new.customer_name(),
            new.date()
        ))
        .add_action(PlanAction::AppendReservation(new)))
    }

    /// Validates a draft and appends it as a `PENDING` reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or the store fails.
    pub fn create_reservation(&mut self, draft: ReservationDraft) -> Result<Reservation> {
        let plan = self.plan_create(draft)?;
        let result = PlanExecutor::new(&mut self.store).execute(&plan)?;
        result.created.ok_or_else(|| Error::NotFound {
            resource: "created reservation".into(),
        })
    }

    /// Decides what confirming `id` on behalf of `principal` would do.
    ///
    /// The confirmation (timestamp and fresh code) is minted here so a dry
    /// run shows the code that would be written. When the store cannot read
    /// single records, the write is planned blind and the store decides.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal is blank or the store fails.
    pub fn plan_confirm(&self, id: &ReservationId, principal: &str) -> Result<ConfirmPlan> {
        let confirmation = Confirmation::new(principal, self.locator.generate(), Utc::now())?;

        let mut warning = None;
        match self.store.get_by_id(id) {
            Ok(None) => {
                return Ok(ConfirmPlan::Settled(ConfirmOutcome::NotFound { id: id.clone() }));
            }
            Ok(Some(current)) => match current.status() {
                ReservationStatus::Pending => {}
                ReservationStatus::Confirmed => {
                    return Ok(ConfirmPlan::Settled(match current.confirmation() {
                        Some(existing) => ConfirmOutcome::AlreadyConfirmed {
                            id: id.clone(),
                            confirmation: existing.clone(),
                        },
                        None => ConfirmOutcome::NotConfirmable {
                            id: id.clone(),
                            status: current.status(),
                        },
                    }));
                }
                status @ ReservationStatus::Cancelled => {
                    return Ok(ConfirmPlan::Settled(ConfirmOutcome::NotConfirmable {
                        id: id.clone(),
                        status,
                    }));
                }
            },
            Err(err) if err.is_unsupported() => {
                log::debug!("store cannot read reservation {id}; confirming blind");
                warning = Some(format!(
                    "reservation {id} could not be read first; the store decides whether it can be confirmed"
                ));
            }
            Err(err) => return Err(err),
        }

        let mut plan = OperationPlan::new(format!("Confirm payment for reservation {id}"))
            .add_action(PlanAction::ConfirmReservation {
                id: id.clone(),
                update: ReservationUpdate::confirm(confirmation.clone()),
            });
        if let Some(warning) = warning {
            plan = plan.add_warning(warning);
        }

        Ok(ConfirmPlan::Write {
            plan,
            id: id.clone(),
            confirmation,
        })
    }

    /// Confirms the payment of a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the principal is blank or the store fails.
    pub fn confirm(&mut self, id: &ReservationId, principal: &str) -> Result<ConfirmOutcome> {
        match self.plan_confirm(id, principal)? {
            ConfirmPlan::Settled(outcome) => {
                log::info!("{outcome}");
                Ok(outcome)
            }
            ConfirmPlan::Write {
                plan,
                id,
                confirmation,
            } => {
                let executed = PlanExecutor::new(&mut self.store).execute(&plan);
                let result = match executed {
                    Ok(result) => result,
                    Err(err @ Error::Validation { .. }) => {
                        return self.settle_rejected_confirm(&id, err);
                    }
                    Err(err) => return Err(err),
                };
                if result.success {
                    log::info!("reservation {id} confirmed with code {}", confirmation.code());
                    Ok(ConfirmOutcome::Confirmed { id, confirmation })
                } else {
                    Ok(ConfirmOutcome::NotFound { id })
                }
            }
        }
    }

    /// Re-reads a reservation whose confirm write was refused. Another
    /// writer may have confirmed it between the plan and the write; that is
    /// reported as [`ConfirmOutcome::AlreadyConfirmed`] and anything else
    /// surfaces `err`.
    fn settle_rejected_confirm(&self, id: &ReservationId, err: Error) -> Result<ConfirmOutcome> {
        let Ok(Some(current)) = self.store.get_by_id(id) else {
            return Err(err);
        };
        match current.confirmation() {
            Some(existing) if current.status() == ReservationStatus::Confirmed => {
                let outcome = ConfirmOutcome::AlreadyConfirmed {
                    id: id.clone(),
                    confirmation: existing.clone(),
                };
                log::info!("{outcome} by a concurrent writer");
                Ok(outcome)
            }
            _ => Err(err),
        }
    }

    /// Confirms a payment, reporting only whether the reservation ends up
    /// confirmed.
    ///
    /// Unknown ids, non-confirmable statuses and failures all return
    /// `false`; failures are logged.
    pub fn confirm_payment(&mut self, id: &ReservationId, principal: &str) -> bool {
        match self.confirm(id, principal) {
            Ok(outcome) => outcome.is_success(),
            Err(err) => {
                log::error!("could not confirm reservation {id}: {err}");
                false
            }
        }
    }

    /// Lists the reservations for a date. A store failure yields an empty
    /// list and is logged.
    pub fn list_by_date(&self, date: NaiveDate) -> Vec<Reservation> {
        self.store.list_by_date(date).unwrap_or_else(|err| {
            log::error!("could not list reservations for {date}: {err}");
            Vec::new()
        })
    }

    /// Summarizes a date. A store failure yields zeros and is logged.
    pub fn dashboard(&self, date: NaiveDate) -> DashboardData {
        dashboard::summarize(&self.store, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::parse_time;
    use crate::store::MemoryStore;
    use rust_decimal::Decimal;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn draft(name: &str, party_size: u32) -> ReservationDraft {
        ReservationDraft::new(
            date(),
            parse_time("time", "19:00").unwrap(),
            name,
            "(11) 91234-5678",
            party_size,
        )
    }

    fn lifecycle_with(names: &[&str]) -> ReservationLifecycle<MemoryStore> {
        let mut lifecycle = ReservationLifecycle::new(MemoryStore::new());
        for name in names {
            lifecycle.create_reservation(draft(name, 2)).unwrap();
        }
        lifecycle
    }

    #[test]
    fn test_create_sets_pending_and_amount() {
        let mut lifecycle = lifecycle_with(&[]);
        let created = lifecycle.create_reservation(draft("Ana", 4)).unwrap();

        assert_eq!(created.status(), ReservationStatus::Pending);
        assert_eq!(created.amount_due(), Decimal::new(4000, 2));
        assert!(created.confirmation().is_none());
        assert_eq!(lifecycle.store().len(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_drafts_before_the_store() {
        let mut lifecycle = lifecycle_with(&[]);

        let err = lifecycle.create_reservation(draft("Ana", 0)).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "party_size"));

        let err = lifecycle.create_reservation(draft("   ", 2)).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "customer_name"));

        assert!(lifecycle.store().is_empty());
    }

    #[test]
    fn test_confirm_pending() {
        let mut lifecycle = lifecycle_with(&["Ana"]);
        let id = ReservationId::from(1);
        let before = Utc::now();

        let outcome = lifecycle.confirm(&id, "staff@mesa.test").unwrap();

        let ConfirmOutcome::Confirmed { confirmation, .. } = outcome else {
            panic!("expected a confirmation, got {outcome:?}");
        };
        assert_eq!(confirmation.confirmed_by(), "staff@mesa.test");
        assert!(confirmation.confirmed_at() >= before);
        assert_eq!(confirmation.code().as_str().len(), 4);

        let stored = &lifecycle.store().snapshot()[0];
        assert_eq!(stored.status(), ReservationStatus::Confirmed);
        assert_eq!(stored.confirmation(), Some(&confirmation));
    }

    #[test]
    fn test_confirm_unknown_id_leaves_store_untouched() {
        let mut lifecycle = lifecycle_with(&["Ana"]);
        let before = lifecycle.store().snapshot().to_vec();

        assert!(!lifecycle.confirm_payment(&ReservationId::from(42), "staff@mesa.test"));
        assert_eq!(lifecycle.store().snapshot(), before.as_slice());
    }

    #[test]
    fn test_reconfirm_is_idempotent() {
        let mut lifecycle = lifecycle_with(&["Ana"]);
        let id = ReservationId::from(1);

        let first = lifecycle.confirm(&id, "staff@mesa.test").unwrap();
        let second = lifecycle.confirm(&id, "other@mesa.test").unwrap();

        assert!(matches!(second, ConfirmOutcome::AlreadyConfirmed { .. }));
        assert_eq!(first.code(), second.code());
        assert!(lifecycle.confirm_payment(&id, "other@mesa.test"));
        assert_eq!(
            lifecycle.store().snapshot()[0]
                .confirmation()
                .unwrap()
                .confirmed_by(),
            "staff@mesa.test"
        );
    }

    #[test]
    fn test_cancelled_cannot_be_confirmed() {
        let cancelled = Reservation::builder(ReservationId::from(5), date(), parse_time("t", "20:00").unwrap())
            .customer_name("Caio")
            .phone("1")
            .party_size(1)
            .status(ReservationStatus::Cancelled)
            .build()
            .unwrap();
        let mut lifecycle =
            ReservationLifecycle::new(MemoryStore::with_reservations(vec![cancelled.clone()]));

        let outcome = lifecycle.confirm(cancelled.id(), "staff@mesa.test").unwrap();
        assert_eq!(
            outcome,
            ConfirmOutcome::NotConfirmable {
                id: cancelled.id().clone(),
                status: ReservationStatus::Cancelled,
            }
        );
        assert!(!lifecycle.confirm_payment(cancelled.id(), "staff@mesa.test"));
        assert_eq!(lifecycle.store().snapshot(), &[cancelled]);
    }

    #[test]
    fn test_blank_principal_is_rejected() {
        let mut lifecycle = lifecycle_with(&["Ana"]);
        let id = ReservationId::from(1);

        assert!(matches!(
            lifecycle.confirm(&id, "  "),
            Err(Error::Validation { .. })
        ));
        assert!(!lifecycle.confirm_payment(&id, ""));
        assert_eq!(
            lifecycle.store().snapshot()[0].status(),
            ReservationStatus::Pending
        );
    }

    #[test]
    fn test_plan_confirm_does_not_write() {
        let lifecycle = lifecycle_with(&["Ana"]);
        let id = ReservationId::from(1);

        let ConfirmPlan::Write { plan, confirmation, .. } =
            lifecycle.plan_confirm(&id, "staff@mesa.test").unwrap()
        else {
            panic!("expected a write plan");
        };
        assert_eq!(plan.len(), 1);
        assert!(plan.warnings.is_empty());
        assert!(plan.actions[0]
            .description()
            .contains(confirmation.code().as_str()));
        assert_eq!(
            lifecycle.store().snapshot()[0].status(),
            ReservationStatus::Pending
        );
    }

    #[test]
    fn test_plan_create_validates() {
        let lifecycle = lifecycle_with(&[]);
        assert!(lifecycle.plan_create(draft("Ana", 0)).is_err());
        let plan = lifecycle.plan_create(draft("Ana", 2)).unwrap();
        assert_eq!(plan.len(), 1);
        assert!(lifecycle.store().is_empty());
    }

    #[test]
    fn test_list_and_dashboard() {
        let mut lifecycle = lifecycle_with(&["Ana", "Bia", "Caio"]);
        lifecycle.confirm_payment(&ReservationId::from(2), "staff@mesa.test");

        assert_eq!(lifecycle.list_by_date(date()).len(), 3);
        let summary = lifecycle.dashboard(date());
        assert_eq!(summary.total_reservations, 3);
        assert_eq!(summary.total_confirmed, 1);
        assert_eq!(summary.total_pending, 2);
        assert_eq!(summary.total_confirmed_revenue, Decimal::new(2000, 2));
    }

    /// Lets another writer confirm the reservation right before our write.
    struct RivalConfirmStore {
        inner: MemoryStore,
        rival: Option<Confirmation>,
    }

    impl ReservationStore for RivalConfirmStore {
        fn list_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>> {
            self.inner.list_by_date(date)
        }

        fn get_by_id(&self, id: &ReservationId) -> Result<Option<Reservation>> {
            self.inner.get_by_id(id)
        }

        fn append(&mut self, reservation: crate::NewReservation) -> Result<Reservation> {
            self.inner.append(reservation)
        }

        fn update_by_id(&mut self, id: &ReservationId, update: &ReservationUpdate) -> Result<bool> {
            if let Some(rival) = self.rival.take() {
                self.inner.update_by_id(id, &ReservationUpdate::confirm(rival))?;
            }
            self.inner.update_by_id(id, update)
        }
    }

    #[test]
    fn test_confirm_lost_race_reports_already_confirmed() {
        let mut inner = MemoryStore::new();
        inner.append(draft("Ana", 2).validate().unwrap()).unwrap();
        let rival = Confirmation::new(
            "rival@mesa.test",
            ConfirmationCode::parse("9999").unwrap(),
            Utc::now(),
        )
        .unwrap();
        let mut lifecycle = ReservationLifecycle::new(RivalConfirmStore {
            inner,
            rival: Some(rival.clone()),
        });
        let id = ReservationId::from(1);

        let outcome = lifecycle.confirm(&id, "staff@mesa.test").unwrap();

        assert_eq!(
            outcome,
            ConfirmOutcome::AlreadyConfirmed {
                id: id.clone(),
                confirmation: rival,
            }
        );
        assert!(lifecycle.confirm_payment(&id, "staff@mesa.test"));
    }

    #[test]
    fn test_into_store_returns_state() {
        let lifecycle = lifecycle_with(&["Ana"]);
        assert_eq!(lifecycle.into_store().len(), 1);
    }
}
