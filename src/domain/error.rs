use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// True when the caller supplied bad input, false when the stored data
    /// or the backing store is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound(_)
                | DomainError::InvalidInput(_)
                | DomainError::InvalidWindow(_)
                | DomainError::Parse(_)
        )
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Database(e.to_string())
    }
}
