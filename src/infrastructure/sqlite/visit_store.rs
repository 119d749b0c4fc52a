use crate::domain::entities::visit::Visit;
use crate::domain::error::DomainError;
use crate::domain::ports::visit_store::VisitStore;
use crate::domain::values::date_window::{parse_date, DateWindow, DATE_FORMAT};
use rusqlite::{params, Connection};
use std::sync::Mutex;
use uuid::Uuid;

/// Reads visits from the `visit` table, resolving the owner through
/// `user.id_uuid`. UUIDs may be stored as 32-char hex or hyphenated text.
pub struct SqliteVisitStore {
    conn: Mutex<Connection>,
}

impl SqliteVisitStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_visit(row: &rusqlite::Row, user_id: &Uuid) -> Result<Visit, DomainError> {
        let id: i64 = row.get(0)?;
        let country_id: Option<i64> = row.get(1)?;
        let start_str: String = row.get(2)?;
        let end_str: Option<String> = row.get(3)?;

        let country_id = country_id
            .ok_or_else(|| DomainError::DataIntegrity(format!("Visit {id} has no country")))?;
        let start = parse_date(&start_str)
            .map_err(|e| DomainError::DataIntegrity(format!("Visit {id} start: {e}")))?;
        let end = end_str
            .map(|s| parse_date(&s))
            .transpose()
            .map_err(|e| DomainError::DataIntegrity(format!("Visit {id} end: {e}")))?;

        Visit::new(id, *user_id, country_id, start, end)
            .map_err(|e| DomainError::DataIntegrity(e.to_string()))
    }
}

impl VisitStore for SqliteVisitStore {
    fn visits_for_user(&self, user_id: &Uuid, window: &DateWindow) -> Result<Vec<Visit>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT v.id, v.country_id, v.start, v.\"end\"
                 FROM visit v JOIN \"user\" u ON u.id = v.user_id
                 WHERE (u.id_uuid = ?1 OR u.id_uuid = ?2)
                   AND (v.\"end\" >= ?3 OR v.\"end\" IS NULL)
                   AND v.start <= ?4
                 ORDER BY v.start ASC, v.id ASC",
            )
            .map_err(|e| DomainError::Database(format!("Failed to prepare visit query: {e}")))?;

        let rows = stmt
            .query_map(
                params![
                    user_id.simple().to_string(),
                    user_id.hyphenated().to_string(),
                    window.start().format(DATE_FORMAT).to_string(),
                    window.end().format(DATE_FORMAT).to_string(),
                ],
                |row| Ok(Self::row_to_visit(row, user_id)),
            )
            .map_err(|e| DomainError::Database(format!("Failed to query visits: {e}")))?;

        let mut visits = Vec::new();
        for row in rows {
            visits.push(row??);
        }
        tracing::debug!(user = %user_id, count = visits.len(), "loaded visits");
        Ok(visits)
    }
}
