//! Database schema definitions and SQL constants.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// `AUTOINCREMENT` keeps ids from being reused after a row is removed by
/// hand. Amounts are stored as decimal text to stay exact.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        customer_name TEXT NOT NULL,
        phone TEXT NOT NULL,
        party_size INTEGER NOT NULL,
        note TEXT,
        status TEXT NOT NULL,
        amount_due TEXT NOT NULL,
        confirmed_at TEXT,
        confirmed_by TEXT,
        confirmation_code TEXT
    )";

/// SQL statement to create an index on the date column.
pub const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_date ON reservations(date)";

/// SQL statement that yields 1 when the metadata table exists, 0 otherwise.
pub const METADATA_TABLE_EXISTS: &str =
    "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'metadata')";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Column list shared by every reservation query, in row-mapping order.
pub const RESERVATION_COLUMNS: &str = "id, date, time, customer_name, phone, party_size, note, \
     status, amount_due, confirmed_at, confirmed_by, confirmation_code";

/// SQL statement to insert a new reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (date, time, customer_name, phone, party_size, note, status, amount_due)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to write the mutable columns of a reservation.
pub const UPDATE_RESERVATION_STATUS: &str = r"
    UPDATE reservations
    SET status = ?, confirmed_at = ?, confirmed_by = ?, confirmation_code = ?
    WHERE id = ?
";
