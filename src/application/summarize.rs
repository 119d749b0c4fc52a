use crate::domain::entities::country::Country;
use crate::domain::entities::visit::Visit;
use crate::domain::error::DomainError;
use crate::domain::ports::country_directory::CountryDirectory;
use crate::domain::ports::visit_store::VisitStore;
use crate::domain::values::date_window::DateWindow;
use crate::domain::values::occupancy::OccupancyTable;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub const SCHENGEN_LABEL: &str = "Schengen";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub days: i64,
    pub country_id: Option<i64>,
    pub country_name: String,
    pub country_code: Option<String>,
}

impl SummaryRow {
    pub fn is_schengen(&self) -> bool {
        self.country_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub summary: Vec<SummaryRow>,
}

impl SummaryResult {
    pub fn row_for_code(&self, code: &str) -> Option<&SummaryRow> {
        self.summary
            .iter()
            .find(|r| r.country_code.as_deref() == Some(code))
    }

    pub fn schengen(&self) -> Option<&SummaryRow> {
        self.summary.iter().find(|r| r.is_schengen())
    }
}

/// Counts the days spent in each country, and in the Schengen area as a
/// whole, within `window`.
///
/// Rows are ordered by country code, with the Schengen aggregate last.
/// Ongoing visits count through the window end.
pub fn summarize(
    window: &DateWindow,
    visits: &[Visit],
    countries: &[Country],
) -> Result<SummaryResult, DomainError> {
    let mut result = SummaryResult {
        start_date: window.start(),
        end_date: window.end(),
        total_days: window.total_days(),
        summary: Vec::new(),
    };
    if visits.is_empty() {
        return Ok(result);
    }

    let by_id: HashMap<i64, &Country> = countries.iter().map(|c| (c.id, c)).collect();
    let table = OccupancyTable::build(visits, &by_id, window.end())?;
    tracing::debug!(
        visits = visits.len(),
        span = ?table.span(),
        window = %window,
        "built occupancy table"
    );

    let mut seen: Vec<&Country> = table
        .countries_seen()
        .into_iter()
        .filter_map(|id| by_id.get(&id).copied())
        .collect();
    seen.sort_by(|a, b| a.code.cmp(&b.code).then(a.id.cmp(&b.id)));

    for country in seen {
        let days = table.present_days(country.id, window);
        if days > 0 {
            result.summary.push(SummaryRow {
                days,
                country_id: Some(country.id),
                country_name: country.name.clone(),
                country_code: Some(country.code.clone()),
            });
        }
    }

    let schengen_days = table.schengen_days(window);
    if schengen_days > 0 {
        result.summary.push(SummaryRow {
            days: schengen_days,
            country_id: None,
            country_name: SCHENGEN_LABEL.to_string(),
            country_code: None,
        });
    }

    Ok(result)
}

pub struct SummarizeUseCase {
    visits: Arc<dyn VisitStore>,
    countries: Arc<dyn CountryDirectory>,
}

impl SummarizeUseCase {
    pub fn new(visits: Arc<dyn VisitStore>, countries: Arc<dyn CountryDirectory>) -> Self {
        Self { visits, countries }
    }

    pub fn execute(&self, user_id: &Uuid, window: &DateWindow) -> Result<SummaryResult, DomainError> {
        let visits = self.visits.visits_for_user(user_id, window)?;
        let countries = self.countries.all()?;
        let result = summarize(window, &visits, &countries)?;
        tracing::info!(
            user = %user_id,
            window = %window,
            rows = result.summary.len(),
            "summarized visits"
        );
        Ok(result)
    }
}
