//! Civic education feature.
//!
//! Read-only access to the static education-topic catalog: a list view
//! with short descriptions and a detail view with the full text.

pub mod catalog;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::EducationService;
