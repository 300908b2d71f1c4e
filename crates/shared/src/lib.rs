//! Shared utilities for the realty back-office service.
//!
//! This crate provides common functionality used across all other crates:
//! - Password hashing with Argon2id
//! - Common validation logic

pub mod password;
pub mod validation;
