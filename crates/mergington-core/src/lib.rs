//!
//! Mergington Core - Activity directory for Mergington High School
//!
//! This crate defines the domain model (activities, catalog, participant
//! rosters), the repository interface that stores implement, and the
//! directory service the HTTP layer calls into.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - activities, catalog and repository interface
pub mod domain;

/// Application services
pub mod application;

/// Error types
pub mod error;

// Re-export key types
pub use application::directory_service::{ActivityDirectoryService, Confirmation};
pub use domain::activity::{normalize_email, Activity};
pub use domain::catalog::{seed_catalog, ActivityCatalog};
pub use domain::repository::ActivityRepository;
pub use error::{CoreError, CoreResult, ErrorKind};
