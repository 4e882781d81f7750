//! Error types for the mesa library.
//!
//! This module provides the error hierarchy for all operations in the
//! mesa library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a mesa error.
///
/// # Examples
///
/// ```
/// use mesa::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the mesa library.
///
/// This enum encompasses all possible error conditions that can occur
/// while reading, creating and confirming reservations.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The remote reservation endpoint could not be reached or answered garbage.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A JSON payload could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// Stored data violates a reservation invariant.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// The backend cannot perform the requested operation.
    #[error("operation not supported by this store: {operation}")]
    Unsupported {
        /// The operation that was attempted.
        operation: String,
    },

    /// The remote endpoint answered with a payload that is not a valid reservation.
    #[error("malformed response to '{action}': {details}")]
    MalformedResponse {
        /// The action discriminator that was sent.
        action: String,
        /// What was wrong with the payload.
        details: String,
    },

    /// The remote endpoint answered with a non-success status.
    #[error("remote endpoint rejected '{action}' with HTTP {status}")]
    RemoteRejected {
        /// The action discriminator that was sent.
        action: String,
        /// The HTTP status code returned.
        status: u16,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesa::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation 42".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error means the backend cannot serve the operation at all.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Check if error was caused by invalid input rather than the medium.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "party_size".to_string(),
            message: "must be at least 1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("party_size"));
        assert!(display.contains("must be at least 1"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            resource: "reservation 17".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("17"));
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_lock_timeout_error() {
        let err = Error::LockTimeout { seconds: 5 };
        let display = format!("{err}");
        assert!(display.contains("lock timeout"));
        assert!(display.contains('5'));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_remote_rejected_error() {
        let err = Error::RemoteRejected {
            action: "createReserva".to_string(),
            status: 500,
        };
        let display = format!("{err}");
        assert!(display.contains("createReserva"));
        assert!(display.contains("500"));
    }

    #[test]
    fn test_unsupported_error() {
        let err = Error::Unsupported {
            operation: "get_by_id".to_string(),
        };
        assert!(err.is_unsupported());
        assert!(format!("{err}").contains("get_by_id"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: Error = crate::reservation::ValidationError {
            field: "phone".into(),
            message: "must be non-empty".into(),
        }
        .into();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "phone"));
    }
}
