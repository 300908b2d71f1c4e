//! HTTP route handlers.

pub mod apartments;
pub mod health;
pub mod realty;
pub mod resources;

pub use realty::realty_routes;
