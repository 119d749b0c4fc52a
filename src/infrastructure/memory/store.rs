use crate::domain::entities::country::Country;
use crate::domain::entities::visit::Visit;
use crate::domain::error::DomainError;
use crate::domain::ports::country_directory::CountryDirectory;
use crate::domain::ports::visit_store::VisitStore;
use crate::domain::values::date_window::DateWindow;
use std::sync::RwLock;
use uuid::Uuid;

/// Holds visits and countries in memory. Serves both ports.
#[derive(Default)]
pub struct InMemoryStore {
    visits: RwLock<Vec<Visit>>,
    countries: RwLock<Vec<Country>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `countries` through [`InMemoryStore::insert_country`], so duplicate
    /// ids or codes are rejected.
    pub fn with_countries(self, countries: Vec<Country>) -> Result<Self, DomainError> {
        for country in countries {
            self.insert_country(country)?;
        }
        Ok(self)
    }

    pub fn with_visits(self, visits: Vec<Visit>) -> Self {
        Self {
            visits: RwLock::new(visits),
            ..self
        }
    }

    pub fn insert_visit(&self, visit: Visit) -> Result<(), DomainError> {
        let mut visits = self
            .visits
            .write()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        visits.push(visit);
        Ok(())
    }

    pub fn insert_country(&self, country: Country) -> Result<(), DomainError> {
        let mut countries = self
            .countries
            .write()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        if countries.iter().any(|c| c.id == country.id || c.code == country.code) {
            return Err(DomainError::InvalidInput(format!(
                "Duplicate country: id {} / code {}",
                country.id, country.code
            )));
        }
        countries.push(country);
        Ok(())
    }
}

impl VisitStore for InMemoryStore {
    fn visits_for_user(&self, user_id: &Uuid, window: &DateWindow) -> Result<Vec<Visit>, DomainError> {
        let visits = self
            .visits
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut matching: Vec<Visit> = visits
            .iter()
            .filter(|v| &v.user_id == user_id && v.overlaps(window))
            .cloned()
            .collect();
        matching.sort_by_key(|v| (v.start, v.id));
        Ok(matching)
    }
}

impl CountryDirectory for InMemoryStore {
    fn all(&self) -> Result<Vec<Country>, DomainError> {
        let countries = self
            .countries
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(countries.clone())
    }

    fn get(&self, id: i64) -> Result<Option<Country>, DomainError> {
        let countries = self
            .countries
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(countries.iter().find(|c| c.id == id).cloned())
    }
}
