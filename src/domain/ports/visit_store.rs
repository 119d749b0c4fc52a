use crate::domain::entities::visit::Visit;
use crate::domain::error::DomainError;
use crate::domain::values::date_window::DateWindow;
use uuid::Uuid;

pub trait VisitStore: Send + Sync {
    /// Visits owned by `user_id` that overlap `window`, ordered by start date.
    fn visits_for_user(&self, user_id: &Uuid, window: &DateWindow) -> Result<Vec<Visit>, DomainError>;
}
