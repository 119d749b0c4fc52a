use crate::domain::entities::country::Country;
use crate::domain::entities::visit::Visit;
use crate::domain::error::DomainError;
use crate::domain::values::date_window::DateWindow;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Who was present on one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayPresence {
    pub countries: BTreeSet<i64>,
    pub schengen: bool,
}

/// Inclusive run of days.
type DayRange = (NaiveDate, NaiveDate);

#[derive(Debug, Clone)]
struct Column {
    country_id: i64,
    ranges: Vec<DayRange>,
}

/// Presence over the minimal span covering a set of visits.
///
/// Each country keeps its days as sorted, disjoint, non-adjacent ranges, so
/// overlapping visits to one country count a day once, while visits to
/// different countries on the same day count for both. Storage and counting
/// cost grow with the number of visits, never with the number of days.
#[derive(Debug, Clone, Default)]
pub struct OccupancyTable {
    span: Option<DayRange>,
    /// Columns in the order their country's first visit was processed.
    columns: Vec<Column>,
    schengen: Vec<DayRange>,
}

impl OccupancyTable {
    /// Builds the table. Ongoing visits are treated as lasting through
    /// `window_end`. Every visit must reference a country in `countries`.
    pub fn build(
        visits: &[Visit],
        countries: &HashMap<i64, &Country>,
        window_end: NaiveDate,
    ) -> Result<Self, DomainError> {
        let Some(first_day) = visits.iter().map(|v| v.start).min() else {
            return Ok(Self::default());
        };
        let last_day = visits
            .iter()
            .map(|v| v.effective_end(window_end).max(v.start))
            .max()
            .unwrap_or(first_day);

        let mut columns: Vec<Column> = Vec::new();
        let mut schengen = Vec::new();
        for visit in visits {
            let country = countries.get(&visit.country_id).ok_or_else(|| {
                DomainError::DataIntegrity(format!(
                    "Visit {} references unknown country {}",
                    visit.id, visit.country_id
                ))
            })?;
            if let Some(end) = visit.end {
                if end < visit.start {
                    return Err(DomainError::DataIntegrity(format!(
                        "Visit {} ends ({end}) before it starts ({})",
                        visit.id, visit.start
                    )));
                }
            }
            let idx = match columns.iter().position(|c| c.country_id == country.id) {
                Some(idx) => idx,
                None => {
                    columns.push(Column {
                        country_id: country.id,
                        ranges: Vec::new(),
                    });
                    columns.len() - 1
                }
            };

            // An ongoing visit starting after the window end marks nothing.
            let end = visit.effective_end(window_end);
            if end < visit.start {
                continue;
            }
            columns[idx].ranges.push((visit.start, end));
            if country.schengen {
                schengen.push((visit.start, end));
            }
        }

        for column in &mut columns {
            column.ranges = merge(std::mem::take(&mut column.ranges));
        }

        Ok(Self {
            span: Some((first_day, last_day)),
            columns,
            schengen: merge(schengen),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    /// First and last day covered, if any visit was supplied.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.span
    }

    pub fn countries_seen(&self) -> Vec<i64> {
        self.columns.iter().map(|c| c.country_id).collect()
    }

    /// Presence on `date`, or `None` outside the span.
    pub fn day(&self, date: NaiveDate) -> Option<DayPresence> {
        let (first, last) = self.span?;
        if date < first || date > last {
            return None;
        }
        Some(DayPresence {
            countries: self
                .columns
                .iter()
                .filter(|c| covers(&c.ranges, date))
                .map(|c| c.country_id)
                .collect(),
            schengen: covers(&self.schengen, date),
        })
    }

    /// Days inside `window` with `country_id` present.
    pub fn present_days(&self, country_id: i64, window: &DateWindow) -> i64 {
        self.columns
            .iter()
            .find(|c| c.country_id == country_id)
            .map_or(0, |c| days_in(&c.ranges, window))
    }

    /// Days inside `window` with any Schengen member present.
    pub fn schengen_days(&self, window: &DateWindow) -> i64 {
        days_in(&self.schengen, window)
    }
}

/// Sorts ranges and folds overlapping or adjacent ones together.
fn merge(mut ranges: Vec<DayRange>) -> Vec<DayRange> {
    ranges.sort_unstable();
    let mut merged: Vec<DayRange> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if last.1.succ_opt().map_or(true, |next| start <= next) => {
                last.1 = last.1.max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

fn covers(ranges: &[DayRange], date: NaiveDate) -> bool {
    ranges.iter().any(|(start, end)| *start <= date && date <= *end)
}

fn days_in(ranges: &[DayRange], window: &DateWindow) -> i64 {
    ranges
        .iter()
        .map(|(start, end)| {
            let from = (*start).max(window.start());
            let to = (*end).min(window.end());
            if from > to {
                0
            } else {
                (to - from).num_days() + 1
            }
        })
        .sum()
}
