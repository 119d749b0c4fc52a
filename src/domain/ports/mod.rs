pub mod country_directory;
pub mod visit_store;
