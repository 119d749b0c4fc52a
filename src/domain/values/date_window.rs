use crate::domain::error::DomainError;
use chrono::NaiveDate;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stand-in for an omitted lower bound, earlier than any recorded visit.
pub fn all_time_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Stand-in for an omitted upper bound.
pub fn all_time_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2038, 1, 1).unwrap_or(NaiveDate::MAX)
}

/// Inclusive date range a summary is computed over. Always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Fills missing bounds with the all-time sentinels. An explicit
    /// `start > end` is rejected; a single bound past the opposite sentinel
    /// pulls that sentinel along with it.
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, DomainError> {
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) if s > e => {
                return Err(DomainError::InvalidWindow(format!(
                    "start date {s} is after end date {e}"
                )));
            }
            (Some(s), Some(e)) => (s, e),
            (Some(s), None) => (s, all_time_end().max(s)),
            (None, Some(e)) => (all_time_start().min(e), e),
            (None, None) => (all_time_start(), all_time_end()),
        };
        Ok(Self { start, end })
    }

    /// Parses optional `YYYY-MM-DD` bounds, then resolves them.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, DomainError> {
        Self::resolve(start.map(parse_date).transpose()?, end.map(parse_date).transpose()?)
    }

    pub fn all_time() -> Self {
        Self {
            start: all_time_start(),
            end: all_time_end(),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| DomainError::Parse(format!("Invalid date '{s}': {e}. Use YYYY-MM-DD")))
}
