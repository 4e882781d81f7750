//! Free-text search over a day's reservations.
//!
//! Matching is plain substring containment. Names are compared after
//! lower-casing and stripping combining accents, phones are compared on their
//! digits only, and locator codes are compared as typed.

use unicode_normalization::UnicodeNormalization;

use crate::Reservation;

/// Lower-cases text and strips combining diacritical marks.
///
/// # Examples
///
/// ```
/// use mesa::search::normalize_text;
///
/// assert_eq!(normalize_text("João CONCEIÇÃO"), "joao conceicao");
/// ```
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

/// Keeps only the ASCII digits of a string.
///
/// ```
/// use mesa::search::digits_only;
///
/// assert_eq!(digits_only("(11) 91234-5678"), "11912345678");
/// ```
#[must_use]
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// A prepared search query.
///
/// # Examples
///
/// ```
/// use mesa::search::SearchQuery;
///
/// let query = SearchQuery::new("Joã 9123");
/// assert_eq!(query.text(), "joa 9123");
/// assert_eq!(query.digits(), "9123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    digits: String,
}

impl SearchQuery {
    /// Prepares a query from raw user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            text: normalize_text(raw),
            digits: digits_only(raw),
        }
    }

    /// Returns the normalized query text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the digits extracted from the query.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Checks whether a reservation matches this query.
    #[must_use]
    pub fn matches(&self, reservation: &Reservation) -> bool {
        let name_match = normalize_text(reservation.customer_name()).contains(&self.text);

        let phone_match =
            !self.digits.is_empty() && digits_only(reservation.phone()).contains(&self.digits);

        let code_match = reservation
            .confirmation_code()
            .is_some_and(|code| code.as_str().contains(&self.text));

        name_match || phone_match || code_match
    }
}

/// Filters reservations by a free-text query, keeping input order.
///
/// A blank query returns every reservation.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use mesa::{search, Reservation, ReservationId};
///
/// let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
/// let time = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
/// let joao = Reservation::builder(ReservationId::from(1), date, time)
///     .customer_name("João Silva")
///     .phone("(11) 91234-5678")
///     .build()
///     .unwrap();
///
/// let all = vec![joao];
/// assert_eq!(search::filter(&all, "joao").len(), 1);
/// assert_eq!(search::filter(&all, "1234").len(), 1);
/// assert!(search::filter(&all, "pedro").is_empty());
/// ```
#[must_use]
pub fn filter<'a>(reservations: &'a [Reservation], query: &str) -> Vec<&'a Reservation> {
    if query.trim().is_empty() {
        return reservations.iter().collect();
    }

    let query = SearchQuery::new(query);
    reservations.iter().filter(|r| query.matches(r)).collect()
}
