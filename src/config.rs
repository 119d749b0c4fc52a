//! Runtime configuration, read from the environment (and `.env`, if present).

pub const DEFAULT_DB_PATH: &str = "./nomadtrack.db";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `NOMADTRACK_DB`
    pub db_path: String,
    /// `NOMADTRACK_LOG`; `RUST_LOG` takes precedence when set.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            db_path: lookup("NOMADTRACK_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
            log_level: lookup("NOMADTRACK_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
