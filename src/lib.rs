pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::countries::CountriesUseCase;
use crate::application::summarize::{SummarizeUseCase, SummaryResult};
use crate::application::visits::{VisitListing, VisitsUseCase};
use crate::domain::entities::country::Country;
use crate::domain::error::DomainError;
use crate::domain::ports::country_directory::CountryDirectory;
use crate::domain::ports::visit_store::VisitStore;
use crate::domain::values::date_window::DateWindow;
use crate::infrastructure::sqlite::country_directory::SqliteCountryDirectory;
use crate::infrastructure::sqlite::open_read_only;
use crate::infrastructure::sqlite::visit_store::SqliteVisitStore;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

pub struct NomadTrack {
    summarize_uc: SummarizeUseCase,
    visits_uc: VisitsUseCase,
    countries_uc: CountriesUseCase,
}

impl NomadTrack {
    /// Reads from the SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let visit_store: Arc<dyn VisitStore> = Arc::new(SqliteVisitStore::new(open_read_only(db_path)?));
        let directory: Arc<dyn CountryDirectory> =
            Arc::new(SqliteCountryDirectory::new(open_read_only(db_path)?));
        tracing::debug!(db_path, "opened visits database");
        Ok(Self::with_stores(visit_store, directory))
    }

    pub fn with_stores(visit_store: Arc<dyn VisitStore>, directory: Arc<dyn CountryDirectory>) -> Self {
        Self {
            summarize_uc: SummarizeUseCase::new(visit_store.clone(), directory.clone()),
            visits_uc: VisitsUseCase::new(visit_store),
            countries_uc: CountriesUseCase::new(directory),
        }
    }

    pub fn summary(
        &self,
        user_id: &Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<SummaryResult, DomainError> {
        let window = DateWindow::resolve(start, end)?;
        self.summarize_uc.execute(user_id, &window)
    }

    pub fn visits(
        &self,
        user_id: &Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<VisitListing, DomainError> {
        let window = DateWindow::resolve(start, end)?;
        self.visits_uc.execute(user_id, &window)
    }

    pub fn countries(&self) -> Result<Vec<Country>, DomainError> {
        self.countries_uc.list()
    }

    pub fn country(&self, id: i64) -> Result<Country, DomainError> {
        self.countries_uc.get(id)
    }
}
