use crate::domain::entities::country::Country;
use crate::domain::error::DomainError;
use crate::domain::ports::country_directory::CountryDirectory;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

const SELECT_COLS: &str = "id, name, official_state_name, code, schengen";

pub struct SqliteCountryDirectory {
    conn: Mutex<Connection>,
}

impl SqliteCountryDirectory {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_country(row: &rusqlite::Row) -> Result<Country, rusqlite::Error> {
        let schengen: Option<i64> = row.get(4)?;
        Ok(Country {
            id: row.get(0)?,
            name: row.get(1)?,
            official_state_name: row.get(2)?,
            code: row.get(3)?,
            schengen: schengen.unwrap_or(0) != 0,
        })
    }
}

impl CountryDirectory for SqliteCountryDirectory {
    fn all(&self) -> Result<Vec<Country>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!("SELECT {SELECT_COLS} FROM country ORDER BY id"))
            .map_err(|e| DomainError::Database(format!("Failed to prepare country query: {e}")))?;
        let countries = stmt
            .query_map([], Self::row_to_country)
            .map_err(|e| DomainError::Database(format!("Failed to query countries: {e}")))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(countries)
    }

    fn get(&self, id: i64) -> Result<Option<Country>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.query_row(
            &format!("SELECT {SELECT_COLS} FROM country WHERE id = ?1"),
            params![id],
            Self::row_to_country,
        )
        .optional()
        .map_err(|e| DomainError::Database(format!("Failed to get country {id}: {e}")))
    }
}
