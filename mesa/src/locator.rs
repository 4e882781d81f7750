//! Locator codes handed to customers when a payment is confirmed.
//!
//! A locator is a short numeric code a customer can read out over the phone
//! so staff can find the reservation quickly. It is not a security token and
//! is not globally unique; lookups always combine it with name or phone.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::reservation::ValidationError;

/// Smallest code that can be issued.
pub const MIN_CODE: u16 = 1000;

/// Largest code that can be issued.
pub const MAX_CODE: u16 = 9999;

/// A four-digit confirmation code in `1000..=9999`.
///
/// # Examples
///
/// ```
/// use mesa::ConfirmationCode;
///
/// let code = ConfirmationCode::parse("4821").unwrap();
/// assert_eq!(code.as_str(), "4821");
///
/// assert!(ConfirmationCode::parse("0999").is_err());
/// assert!(ConfirmationCode::parse("12a4").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    /// Parses a code from text.
    ///
    /// # Errors
    ///
    /// Returns an error unless the text is exactly four ASCII digits with a
    /// non-zero leading digit.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        let well_formed = trimmed.len() == 4
            && trimmed.bytes().all(|b| b.is_ascii_digit())
            && !trimmed.starts_with('0');
        if !well_formed {
            return Err(ValidationError {
                field: "confirmation_code".into(),
                message: format!("expected four digits between {MIN_CODE} and {MAX_CODE}, got '{text}'"),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the code text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_value(value: u16) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ConfirmationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ConfirmationCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Issues fresh locator codes.
///
/// Codes are drawn uniformly from `1000..=9999` on every call; nothing is
/// cached between calls.
///
/// # Examples
///
/// ```
/// use mesa::LocatorGenerator;
///
/// let code = LocatorGenerator::new().generate();
/// assert_eq!(code.as_str().len(), 4);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct LocatorGenerator;

impl LocatorGenerator {
    /// Creates a generator backed by the thread-local RNG.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a new code.
    #[must_use]
    pub fn generate(&self) -> ConfirmationCode {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generates a new code from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> ConfirmationCode {
        ConfirmationCode::from_value(rng.gen_range(MIN_CODE..=MAX_CODE))
    }
}
