//! Persistence layer for the realty back-office service.
//!
//! This crate contains:
//! - Database connection management
//! - Static table descriptors and the generic repository built on them
//! - Entity definitions (database row mappings)
//! - Repository error classification

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;
pub mod repository;
pub mod schema;

pub use error::{ConstraintKind, ContractViolation, RepositoryError};
pub use repository::{Record, Repository};
