//! Property-based tests for reservation types.

use super::{
    amount_for_party, parse_time, Confirmation, Reservation, ReservationDraft, ReservationId,
    ReservationStatus, ReservationUpdate, UNIT_PRICE,
};
use crate::locator::ConfirmationCode;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

fn code_strategy() -> impl Strategy<Value = ConfirmationCode> {
    (1000u16..=9999).prop_map(|n| ConfirmationCode::parse(&n.to_string()).unwrap())
}

fn confirmation_strategy() -> impl Strategy<Value = Confirmation> {
    ("[a-z]{1,10}@mesa\\.test", code_strategy(), 0i64..2_000_000_000).prop_map(
        |(by, code, secs)| Confirmation::new(by, code, Utc.timestamp_opt(secs, 0).unwrap()).unwrap(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // The amount is always party size times the unit price
    #[test]
    fn amount_is_linear_in_party_size(party_size in 1u32..10_000) {
        let new = ReservationDraft::new(date(), NaiveTime::MIN, "Maria", "11", party_size)
            .validate()
            .unwrap();
        prop_assert_eq!(new.amount_due(), amount_for_party(party_size));
        prop_assert_eq!(new.amount_due(), UNIT_PRICE * Decimal::from(party_size));
        prop_assert_eq!(new.amount_due().scale(), 2);
    }

    // Any amount other than the computed one is rejected by the builder
    #[test]
    fn builder_rejects_wrong_amounts(party_size in 1u32..100, cents in 0i64..200_000) {
        let amount = Decimal::new(cents, 2);
        let result = Reservation::builder(ReservationId::from(1), date(), NaiveTime::MIN)
            .customer_name("Maria")
            .phone("11")
            .party_size(party_size)
            .amount_due(amount)
            .build();
        prop_assert_eq!(result.is_ok(), amount == amount_for_party(party_size));
    }

    // Names and phones are stored trimmed; whitespace-only values are rejected
    #[test]
    fn text_fields_are_trimmed(name in "[A-Za-z]{1,10}", pad in " {0,3}") {
        let padded = format!("{pad}{name}{pad}");
        let new = ReservationDraft::new(date(), NaiveTime::MIN, padded.clone(), padded, 1)
            .validate()
            .unwrap();
        prop_assert_eq!(new.customer_name(), name.as_str());
        prop_assert_eq!(new.phone(), name.as_str());

        let blank = ReservationDraft::new(date(), NaiveTime::MIN, pad, "11", 1).validate();
        prop_assert!(blank.is_err());
    }

    // Times written as HH:MM parse back to the same value
    #[test]
    fn hhmm_times_roundtrip(time in time_strategy()) {
        let text = time.format("%H:%M").to_string();
        prop_assert_eq!(parse_time("time", &text).unwrap(), time);
    }

    // Numeric ids read the same from JSON numbers and strings
    #[test]
    fn numeric_ids_accept_both_json_forms(n in 0i64..i64::MAX) {
        let from_number: ReservationId = serde_json::from_str(&n.to_string()).unwrap();
        let from_text: ReservationId = serde_json::from_str(&format!("\"{n}\"")).unwrap();
        prop_assert_eq!(&from_number, &from_text);
        prop_assert_eq!(from_number, ReservationId::from(n));
    }

    // A pending reservation accepts exactly one confirmation
    #[test]
    fn confirmation_is_applied_once(
        party_size in 1u32..20,
        first in confirmation_strategy(),
        second in confirmation_strategy(),
    ) {
        let mut reservation = ReservationDraft::new(date(), NaiveTime::MIN, "Maria", "11", party_size)
            .validate()
            .unwrap()
            .into_reservation(ReservationId::from(1));

        ReservationUpdate::confirm(first.clone()).apply_to(&mut reservation).unwrap();
        prop_assert_eq!(reservation.status(), ReservationStatus::Confirmed);

        let snapshot = reservation.clone();
        prop_assert!(ReservationUpdate::confirm(second).apply_to(&mut reservation).is_err());
        prop_assert_eq!(&reservation, &snapshot);
        prop_assert_eq!(reservation.confirmation(), Some(&first));
    }

    // Reservations survive a JSON round trip unchanged
    #[test]
    fn reservations_roundtrip_through_json(
        party_size in 1u32..50,
        time in time_strategy(),
        confirmation in prop::option::of(confirmation_strategy()),
    ) {
        let status = if confirmation.is_some() {
            ReservationStatus::Confirmed
        } else {
            ReservationStatus::Pending
        };
        let reservation = Reservation::builder(ReservationId::from(9), date(), time)
            .customer_name("Maria")
            .phone("11 5555-0000")
            .party_size(party_size)
            .status(status)
            .confirmation(confirmation)
            .build()
            .unwrap();

        let json = serde_json::to_string(&reservation).unwrap();
        let parsed: Reservation = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, reservation);
    }
}
