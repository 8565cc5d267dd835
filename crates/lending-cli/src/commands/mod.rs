pub mod portfolio;
pub mod schedule;
