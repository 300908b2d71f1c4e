//! Domain layer for the realty back-office service.
//!
//! This crate contains:
//! - Read models and request DTOs for every stored entity
//! - Column-keyed payloads ([`fields::FieldMap`]) handed to persistence

pub mod fields;
pub mod models;
