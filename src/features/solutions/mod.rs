//! Solutions feature.
//!
//! Read-only search over the static remediation-guide catalog: free-text
//! substring match across titles and steps, intersected with an optional
//! category filter. Filter only, catalog order preserved.

pub mod catalog;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SolutionService;
