use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub official_state_name: Option<String>,
    /// ISO 3166 alpha-2.
    pub code: String,
    /// Days spent here count toward the Schengen total.
    pub schengen: bool,
}

impl Country {
    pub fn new(id: i64, name: impl Into<String>, code: impl Into<String>, schengen: bool) -> Self {
        Self {
            id,
            name: name.into(),
            official_state_name: None,
            code: code.into(),
            schengen,
        }
    }

    pub fn with_official_state_name(mut self, name: impl Into<String>) -> Self {
        self.official_state_name = Some(name.into());
        self
    }
}
