use crate::domain::entities::country::Country;
use crate::domain::error::DomainError;
use crate::domain::ports::country_directory::CountryDirectory;
use std::sync::Arc;

pub struct CountriesUseCase {
    directory: Arc<dyn CountryDirectory>,
}

impl CountriesUseCase {
    pub fn new(directory: Arc<dyn CountryDirectory>) -> Self {
        Self { directory }
    }

    pub fn list(&self) -> Result<Vec<Country>, DomainError> {
        let mut countries = self.directory.all()?;
        countries.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(countries)
    }

    pub fn get(&self, id: i64) -> Result<Country, DomainError> {
        self.directory
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Country not found: {id}")))
    }
}
