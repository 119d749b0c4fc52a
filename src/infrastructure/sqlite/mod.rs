pub mod country_directory;
pub mod visit_store;

use crate::domain::error::DomainError;
use rusqlite::{Connection, OpenFlags};

/// Opens an existing visits database for reading. The schema is owned by the
/// service that writes it; nothing here creates or migrates tables.
pub fn open_read_only(db_path: &str) -> Result<Connection, DomainError> {
    Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| DomainError::Database(format!("Failed to open {db_path}: {e}")))
}
