use crate::domain::entities::visit::Visit;
use crate::domain::error::DomainError;
use crate::domain::ports::visit_store::VisitStore;
use crate::domain::values::date_window::DateWindow;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// A user's visits overlapping a window, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct VisitListing {
    pub num_visit: usize,
    pub visits: Vec<Visit>,
}

pub struct VisitsUseCase {
    repo: Arc<dyn VisitStore>,
}

impl VisitsUseCase {
    pub fn new(repo: Arc<dyn VisitStore>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, user_id: &Uuid, window: &DateWindow) -> Result<VisitListing, DomainError> {
        let mut visits = self.repo.visits_for_user(user_id, window)?;
        visits.sort_by_key(|v| (v.start, v.id));
        Ok(VisitListing {
            num_visit: visits.len(),
            visits,
        })
    }
}
