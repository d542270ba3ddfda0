/// Color usage tallies
pub mod summary;
