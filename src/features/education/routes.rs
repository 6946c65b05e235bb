use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::education::handlers;
use crate::features::education::services::EducationService;

/// Create routes for the education feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<EducationService>) -> Router {
    Router::new()
        .route("/api/education", get(handlers::list_topics))
        .route("/api/education/{id}", get(handlers::get_topic))
        .with_state(service)
}
