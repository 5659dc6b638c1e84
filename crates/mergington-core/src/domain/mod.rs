/// Activity records and roster rules
pub mod activity;

/// Ordered activity catalog and the built-in seed data
pub mod catalog;

/// Repository interfaces
pub mod repository;
