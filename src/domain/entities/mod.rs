pub mod country;
pub mod visit;
