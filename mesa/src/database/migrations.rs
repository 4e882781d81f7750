//! Schema versioning for the reservation database.
//!
//! A database carries its schema version in the `metadata` table. Opening
//! a file with no version lays down the current schema; any other version
//! than the one this build writes is refused.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};

use super::schema::{
    CREATE_DATE_INDEX, CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, METADATA_TABLE_EXISTS, SELECT_SCHEMA_VERSION,
};

/// Creates the tables and index of the current schema and records its
/// version, all in one transaction.
///
/// # Errors
///
/// Returns an error if any statement fails; nothing is left behind then.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use mesa::database::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    for statement in [
        CREATE_METADATA_TABLE,
        CREATE_RESERVATIONS_TABLE,
        CREATE_DATE_INDEX,
    ] {
        tx.execute(statement, [])?;
    }
    tx.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION.to_string()])?;
    tx.commit()?;

    log::debug!("initialized reservation schema v{CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Reads the stored schema version. A database without a metadata table
/// or without a version row reports 0.
///
/// # Errors
///
/// Returns an error if the query fails or the stored version is not a
/// number.
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let has_metadata: bool = conn.query_row(METADATA_TABLE_EXISTS, [], |row| row.get(0))?;
    if !has_metadata {
        return Ok(0);
    }

    let stored: Option<String> = conn
        .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))
        .optional()?;

    match stored {
        None => Ok(0),
        Some(text) => text.trim().parse().map_err(|_| Error::DatabaseCorruption {
            details: format!("schema version '{text}' is not a number"),
        }),
    }
}

/// Initializes a fresh database or verifies an existing one.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] for any version other than
/// the current one, or an error if initialization fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    match get_schema_version(conn)? {
        0 => initialize_schema(conn),
        CURRENT_SCHEMA_VERSION => Ok(()),
        found => Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found,
        }),
    }
}
