use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{AttachPhotosDto, SessionResponseDto, UpdateDraftDto};
use crate::features::reports::models::{CandidatePhoto, ReportCategory, SubmissionStatus};
use crate::features::reports::services::ReportSessionService;
use crate::shared::types::ApiResponse;

/// List all report categories
///
/// Returns the closed set of issue kinds in dropdown order.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<ReportCategory>>),
    ),
    tag = "categories"
)]
pub async fn list_categories() -> Json<ApiResponse<Vec<ReportCategory>>> {
    Json(ApiResponse::success(
        Some(ReportCategory::ALL.to_vec()),
        None,
        None,
    ))
}

/// Open a new report form session
#[utoipa::path(
    post,
    path = "/api/report-sessions",
    responses(
        (status = 201, description = "Session created", body = ApiResponse<SessionResponseDto>),
    ),
    tag = "reports"
)]
pub async fn create_session(
    State(service): State<Arc<ReportSessionService>>,
) -> Result<(StatusCode, Json<ApiResponse<SessionResponseDto>>)> {
    let session = service.create_session().await;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(session.into()), None, None)),
    ))
}

/// Get a session's current draft, field errors and submission status
#[utoipa::path(
    get,
    path = "/api/report-sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Session state", body = ApiResponse<SessionResponseDto>),
        (status = 404, description = "Session not found")
    ),
    tag = "reports"
)]
pub async fn get_session(
    State(service): State<Arc<ReportSessionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let session = service.get_session(id).await?;
    Ok(Json(ApiResponse::success(Some(session.into()), None, None)))
}

/// Edit the draft's form fields
///
/// Absent fields are untouched. Rejected with 409 while a submission is
/// in flight; after a settled success/error outcome an edit re-arms the
/// form to idle.
#[utoipa::path(
    patch,
    path = "/api/report-sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    request_body = UpdateDraftDto,
    responses(
        (status = 200, description = "Updated session state", body = ApiResponse<SessionResponseDto>),
        (status = 404, description = "Session not found"),
        (status = 409, description = "A submission is in flight")
    ),
    tag = "reports"
)]
pub async fn update_draft(
    State(service): State<Arc<ReportSessionService>>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateDraftDto>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let session = service.update_draft(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(session.into()), None, None)))
}

/// Discard a session
///
/// Releases every preview the draft still holds.
#[utoipa::path(
    delete,
    path = "/api/report-sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Session deleted"),
        (status = 404, description = "Session not found")
    ),
    tag = "reports"
)]
pub async fn delete_session(
    State(service): State<Arc<ReportSessionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_session(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Session deleted".to_string()),
        None,
    )))
}

/// Attach photos to a draft
///
/// Accepts multipart/form-data with one or more file parts. Each candidate
/// is judged independently (JPG/PNG/WEBP, up to 5MB); rejected candidates
/// are dropped and the last rejection reason is surfaced on the `photos`
/// field of the returned session state.
#[utoipa::path(
    post,
    path = "/api/report-sessions/{id}/photos",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    request_body(
        content = AttachPhotosDto,
        content_type = "multipart/form-data",
        description = "One or more photo file parts",
    ),
    responses(
        (status = 200, description = "Updated session state", body = ApiResponse<SessionResponseDto>),
        (status = 400, description = "Malformed multipart body"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "A submission is in flight")
    ),
    tag = "reports"
)]
pub async fn attach_photos(
    State(service): State<Arc<ReportSessionService>>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let mut candidates: Vec<CandidatePhoto> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        // Every file part is a candidate photo; non-file parts are ignored
        let Some(file_name) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field.bytes().await.map_err(|e| {
            tracing::debug!("Failed to read file bytes: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        candidates.push(CandidatePhoto {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    if candidates.is_empty() {
        return Err(AppError::BadRequest(
            "At least one file part is required".to_string(),
        ));
    }

    let session = service.attach_photos(id, candidates).await?;
    Ok(Json(ApiResponse::success(Some(session.into()), None, None)))
}

/// Remove one photo from a draft
///
/// The photo is addressed by its stable attachment id; exactly its preview
/// resource is released.
#[utoipa::path(
    delete,
    path = "/api/report-sessions/{id}/photos/{photo_id}",
    params(
        ("id" = Uuid, Path, description = "Session id"),
        ("photo_id" = Uuid, Path, description = "Attachment id")
    ),
    responses(
        (status = 200, description = "Updated session state", body = ApiResponse<SessionResponseDto>),
        (status = 404, description = "Session or photo not found"),
        (status = 409, description = "A submission is in flight")
    ),
    tag = "reports"
)]
pub async fn remove_photo(
    State(service): State<Arc<ReportSessionService>>,
    Path((id, photo_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let session = service.remove_photo(id, photo_id).await?;
    Ok(Json(ApiResponse::success(Some(session.into()), None, None)))
}

/// Submit the draft
///
/// Runs the full validation pass; a failing draft stays idle with its
/// field errors. A passing draft is dispatched to the report intake and
/// the session resolves to success (draft consumed) or error (draft kept
/// for retry).
#[utoipa::path(
    post,
    path = "/api/report-sessions/{id}/submit",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Resulting session state", body = ApiResponse<SessionResponseDto>),
        (status = 404, description = "Session not found"),
        (status = 409, description = "A submission is already in flight")
    ),
    tag = "reports"
)]
pub async fn submit(
    State(service): State<Arc<ReportSessionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SessionResponseDto>>> {
    let session = service.submit(id).await?;

    let message = match session.status {
        SubmissionStatus::Success => {
            "Your report has been submitted successfully. Thank you for your contribution."
        }
        SubmissionStatus::Error => {
            "There was an error submitting your report. Please try again later."
        }
        _ => "Please correct the highlighted fields.",
    };

    Ok(Json(ApiResponse::success(
        Some(session.into()),
        Some(message.to_string()),
        None,
    )))
}

/// Serve the bytes backing an admitted photo's preview
#[utoipa::path(
    get,
    path = "/api/previews/{photo_id}",
    params(
        ("photo_id" = Uuid, Path, description = "Attachment id")
    ),
    responses(
        (status = 200, description = "Photo bytes with their media type"),
        (status = 404, description = "Preview not found or already released")
    ),
    tag = "reports"
)]
pub async fn get_preview(
    State(service): State<Arc<ReportSessionService>>,
    Path(photo_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let photo = service.preview(photo_id).await?;
    Ok(([(header::CONTENT_TYPE, photo.content_type)], photo.data))
}
