//! In-memory activity store for the Mergington activities API
//!
//! This crate provides the in-memory implementation of the
//! [`ActivityRepository`](mergington_core::ActivityRepository) interface.
//! State lives for the lifetime of the process and is reset to the seed
//! catalog on every start.

pub mod repositories;
pub use repositories::InMemoryActivityRepository;
