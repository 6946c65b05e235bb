use utoipa::{Modify, OpenApi};

use crate::features::education::{dtos as education_dtos, handlers as education_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::solutions::{dtos as solutions_dtos, handlers as solutions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories (public)
        reports_handlers::report_handler::list_categories,
        // Report sessions
        reports_handlers::report_handler::create_session,
        reports_handlers::report_handler::get_session,
        reports_handlers::report_handler::update_draft,
        reports_handlers::report_handler::delete_session,
        reports_handlers::report_handler::attach_photos,
        reports_handlers::report_handler::remove_photo,
        reports_handlers::report_handler::submit,
        reports_handlers::report_handler::get_preview,
        // Education (public)
        education_handlers::education_handler::list_topics,
        education_handlers::education_handler::get_topic,
        // Solutions (public)
        solutions_handlers::solution_handler::search_solutions,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Reports
            reports_models::ReportCategory,
            reports_models::SubmissionStatus,
            reports_dtos::UpdateDraftDto,
            reports_dtos::AttachPhotosDto,
            reports_dtos::PhotoAttachmentDto,
            reports_dtos::DraftDto,
            reports_dtos::SessionResponseDto,
            ApiResponse<Vec<reports_models::ReportCategory>>,
            ApiResponse<reports_dtos::SessionResponseDto>,
            // Education
            education_dtos::EducationTopicSummaryDto,
            education_dtos::EducationTopicResponseDto,
            ApiResponse<Vec<education_dtos::EducationTopicSummaryDto>>,
            ApiResponse<education_dtos::EducationTopicResponseDto>,
            // Solutions
            solutions_dtos::SolutionResponseDto,
            ApiResponse<Vec<solutions_dtos::SolutionResponseDto>>,
        )
    ),
    tags(
        (name = "categories", description = "Report categories (public)"),
        (name = "reports", description = "Report form sessions, photo attachments and submission"),
        (name = "education", description = "Civic education topics (public)"),
        (name = "solutions", description = "Remediation guides with search and category filter (public)"),
    ),
    info(
        title = "Nagrik API",
        version = "0.1.0",
        description = "API documentation for Nagrik",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
