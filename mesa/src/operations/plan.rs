//! Plan types for reservation operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::reservation::{NewReservation, ReservationId, ReservationUpdate};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to one store call made when the plan is
/// executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Append a validated reservation; the store assigns the id.
    AppendReservation(NewReservation),

    /// Apply a confirmation to an existing reservation.
    ConfirmReservation {
        /// The reservation being confirmed.
        id: ReservationId,
        /// The status and confirmation record to write.
        update: ReservationUpdate,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::AppendReservation(r) => format!(
                "Create reservation for {} on {} at {} ({} guest(s), R$ {:.2} due)",
                r.customer_name(),
                r.date(),
                r.time().format("%H:%M"),
                r.party_size(),
                r.amount_due()
            ),
            Self::ConfirmReservation { id, update } => match update.confirmation {
                Some(ref confirmation) => format!(
                    "Confirm payment for reservation {id} by {} with code {}",
                    confirmation.confirmed_by(),
                    confirmation.code()
                ),
                None => format!("Update reservation {id}"),
            },
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesa::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Confirm reservation 7");
    /// assert_eq!(plan.description, "Confirm reservation 7");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use mesa::operations::{OperationPlan, PlanAction};
    /// use mesa::ReservationDraft;
    ///
    /// let new = ReservationDraft::new(
    ///     NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
    ///     NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    ///     "Maria",
    ///     "11 5555-0000",
    ///     2,
    /// )
    /// .validate()
    /// .unwrap();
    ///
    /// let plan = OperationPlan::new("Test").add_action(PlanAction::AppendReservation(new));
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesa::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_warning("This is a warning");
    ///
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::sample_draft;
    use crate::locator::ConfirmationCode;
    use crate::reservation::Confirmation;
    use chrono::Utc;

    #[test]
    fn test_plan_new() {
        let plan = OperationPlan::new("Test operation");
        assert_eq!(plan.description, "Test operation");
        assert!(plan.actions.is_empty());
        assert!(plan.warnings.is_empty());
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }

    #[test]
    fn test_plan_accumulates_in_order() {
        let plan = OperationPlan::new("Test")
            .add_action(PlanAction::AppendReservation(sample_draft("Ana", "19:00", 2)))
            .add_action(PlanAction::AppendReservation(sample_draft("Bia", "20:00", 1)))
            .add_warning("first")
            .add_warning("second");

        assert_eq!(plan.len(), 2);
        assert!(plan.actions[0].description().contains("Ana"));
        assert!(plan.actions[1].description().contains("Bia"));
        assert_eq!(plan.warnings, vec!["first", "second"]);
    }

    #[test]
    fn test_append_description() {
        let action = PlanAction::AppendReservation(sample_draft("Ana", "19:30", 3));
        assert_eq!(
            action.description(),
            "Create reservation for Ana on 2024-05-10 at 19:30 (3 guest(s), R$ 30.00 due)"
        );
    }

    #[test]
    fn test_confirm_description() {
        let confirmation = Confirmation::new(
            "staff@mesa.test",
            ConfirmationCode::parse("4821").unwrap(),
            Utc::now(),
        )
        .unwrap();
        let action = PlanAction::ConfirmReservation {
            id: ReservationId::from(12),
            update: ReservationUpdate::confirm(confirmation),
        };
        assert_eq!(
            action.description(),
            "Confirm payment for reservation 12 by staff@mesa.test with code 4821"
        );

        let bare = PlanAction::ConfirmReservation {
            id: ReservationId::from(12),
            update: ReservationUpdate::default(),
        };
        assert_eq!(bare.description(), "Update reservation 12");
    }
}
