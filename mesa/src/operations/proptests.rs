//! Property-based tests for operations module.
//!
//! These tests focus on the lifecycle invariants over arbitrary inputs.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::lifecycle::{ConfirmOutcome, ReservationLifecycle};
use super::{OperationPlan, PlanExecutor};
use crate::reservation::{ReservationDraft, ReservationId, ReservationStatus};
use crate::store::MemoryStore;

fn draft_strategy() -> impl Strategy<Value = ReservationDraft> {
    (
        0u32..=366,
        11u32..=23,
        prop_oneof![Just(0u32), Just(30u32)],
        "[A-Za-z]{1,12}( [A-Za-z]{1,12})?",
        "[0-9]{8,11}",
        1u32..=40,
    )
        .prop_map(|(day, hour, minute, name, phone, party_size)| {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(day.into());
            ReservationDraft::new(
                date,
                NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
                name,
                phone,
                party_size,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Creation always yields PENDING, no confirmation, and the fixed price
    #[test]
    fn created_reservations_are_pending_and_priced(draft in draft_strategy()) {
        let mut lifecycle = ReservationLifecycle::new(MemoryStore::new());
        let party_size = draft.clone().validate().unwrap().party_size();
        let created = lifecycle.create_reservation(draft).unwrap();

        prop_assert_eq!(created.status(), ReservationStatus::Pending);
        prop_assert!(created.confirmation().is_none());
        prop_assert_eq!(created.amount_due(), Decimal::from(party_size) * Decimal::TEN);
    }

    // Confirming twice yields the first code both times
    #[test]
    fn confirmation_is_idempotent(draft in draft_strategy(), staff in "[a-z]{1,8}@mesa\\.test") {
        let mut lifecycle = ReservationLifecycle::new(MemoryStore::new());
        let created = lifecycle.create_reservation(draft).unwrap();

        let first = lifecycle.confirm(created.id(), &staff).unwrap();
        let second = lifecycle.confirm(created.id(), &staff).unwrap();

        let code = first.code().unwrap();
        let is_four_digits = code.as_str().len() == 4
            && code.as_str().bytes().all(|b| b.is_ascii_digit());
        prop_assert!(is_four_digits);
        prop_assert!(
            matches!(second, ConfirmOutcome::AlreadyConfirmed { .. }),
            "expected AlreadyConfirmed, got {:?}",
            second
        );
        prop_assert_eq!(first.code(), second.code());
    }

    // Unknown ids never change the store
    #[test]
    fn unknown_ids_are_not_written(drafts in prop::collection::vec(draft_strategy(), 0..6), probe in 100i64..10_000) {
        let mut lifecycle = ReservationLifecycle::new(MemoryStore::new());
        for draft in drafts {
            lifecycle.create_reservation(draft).unwrap();
        }
        let before = lifecycle.store().snapshot().to_vec();

        prop_assert!(!lifecycle.confirm_payment(&ReservationId::from(probe), "staff@mesa.test"));
        prop_assert_eq!(lifecycle.store().snapshot(), before.as_slice());
    }

    // Dry runs report every action and write nothing
    #[test]
    fn dry_runs_write_nothing(drafts in prop::collection::vec(draft_strategy(), 1..6)) {
        let lifecycle = ReservationLifecycle::new(MemoryStore::new());
        let plan = drafts.into_iter().fold(OperationPlan::new("batch"), |plan, draft| {
            let single = lifecycle.plan_create(draft).unwrap();
            single.actions.into_iter().fold(plan, OperationPlan::add_action)
        });

        let mut store = lifecycle.into_store();
        let result = PlanExecutor::new(&mut store).dry_run().execute(&plan).unwrap();

        prop_assert_eq!(result.actions_taken.len(), plan.len());
        prop_assert!(store.is_empty());
    }
}
