use crate::domain::entities::country::Country;
use crate::domain::error::DomainError;

pub trait CountryDirectory: Send + Sync {
    fn all(&self) -> Result<Vec<Country>, DomainError>;
    fn get(&self, id: i64) -> Result<Option<Country>, DomainError>;
}
