use crate::domain::error::DomainError;
use crate::domain::values::date_window::DateWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: i64,
    pub user_id: Uuid,
    pub country_id: i64,
    pub start: NaiveDate,
    /// `None` while the user is still in the country.
    pub end: Option<NaiveDate>,
}

impl Visit {
    pub fn new(
        id: i64,
        user_id: Uuid,
        country_id: i64,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Self, DomainError> {
        if let Some(end) = end {
            if end < start {
                return Err(DomainError::InvalidInput(format!(
                    "Visit {id} ends ({end}) before it starts ({start})"
                )));
            }
        }
        Ok(Self {
            id,
            user_id,
            country_id,
            start,
            end,
        })
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// Last day of presence; an ongoing visit runs through `window_end`.
    pub fn effective_end(&self, window_end: NaiveDate) -> NaiveDate {
        self.end.unwrap_or(window_end)
    }

    /// Same predicate the visit store applies: the visit has not ended before
    /// the window opens and starts no later than the window closes.
    pub fn overlaps(&self, window: &DateWindow) -> bool {
        let not_ended = self.end.map_or(true, |end| end >= window.start());
        not_ended && self.start <= window.end()
    }
}
