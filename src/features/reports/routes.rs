use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportSessionService;

/// Create routes for the report intake feature
///
/// Note: the whole surface is public (no authentication in this service)
pub fn routes(service: Arc<ReportSessionService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/report-sessions", post(handlers::create_session))
        .route(
            "/api/report-sessions/{id}",
            get(handlers::get_session)
                .patch(handlers::update_draft)
                .delete(handlers::delete_session),
        )
        .route(
            "/api/report-sessions/{id}/photos",
            post(handlers::attach_photos),
        )
        .route(
            "/api/report-sessions/{id}/photos/{photo_id}",
            delete(handlers::remove_photo),
        )
        .route("/api/report-sessions/{id}/submit", post(handlers::submit))
        .route("/api/previews/{photo_id}", get(handlers::get_preview))
        .with_state(service)
}
