pub mod countries;
pub mod summarize;
pub mod visits;
