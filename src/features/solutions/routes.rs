use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::solutions::handlers;
use crate::features::solutions::services::SolutionService;

/// Create routes for the solutions feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<SolutionService>) -> Router {
    Router::new()
        .route("/api/solutions", get(handlers::search_solutions))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(SolutionService::new()))).unwrap()
    }

    #[tokio::test]
    async fn search_is_case_insensitive_over_http() {
        let server = server();

        let response = server
            .get("/api/solutions")
            .add_query_param("q", "POTHOLE")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["id"], "s2");
        assert_eq!(body["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn category_all_behaves_like_an_absent_filter() {
        let server = server();

        let absent = server.get("/api/solutions").await;
        let all = server
            .get("/api/solutions")
            .add_query_param("category", "all")
            .await;

        absent.assert_status_ok();
        all.assert_status_ok();

        let absent_body: Value = absent.json();
        let all_body: Value = all.json();
        assert_eq!(absent_body["data"], all_body["data"]);
        assert_eq!(absent_body["data"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn category_labels_use_their_display_form() {
        let server = server();

        let response = server
            .get("/api/solutions")
            .add_query_param("category", "Open Drainage")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["category"], "Open Drainage");
    }

    #[tokio::test]
    async fn unknown_category_label_is_a_bad_request() {
        let server = server();

        let response = server
            .get("/api/solutions")
            .add_query_param("category", "Sewage")
            .await;

        response.assert_status_bad_request();
    }
}
