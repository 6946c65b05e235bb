use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::{
    PhotoAttachment, ReportCategory, ReportDraft, ReportSession, SubmissionStatus,
};

/// Allowed MIME types for photo attachments
pub const ALLOWED_PHOTO_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Maximum photo size in bytes (5MB)
pub const MAX_PHOTO_SIZE: usize = 5 * 1024 * 1024;

/// Admission message for a candidate with a disallowed media type
pub const PHOTO_TYPE_ERROR: &str = "Only JPG, PNG, and WEBP files are allowed.";

/// Admission message for a candidate over the size limit
pub const PHOTO_SIZE_ERROR: &str = "File size cannot exceed 5MB.";

/// Check if a MIME type is allowed for photo attachments
pub fn is_photo_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_PHOTO_MIME_TYPES.contains(&content_type)
}

/// Partial update of a draft's form fields. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateDraftDto {
    pub category: Option<ReportCategory>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub reporter_name: Option<String>,
    pub description: Option<String>,
}

/// Batch photo attach request for OpenAPI documentation.
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AttachPhotosDto {
    /// One or more photo files (JPG, PNG or WEBP, up to 5MB each)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub photos: String,
}

/// Response DTO for one admitted photo
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PhotoAttachmentDto {
    pub id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub byte_size: usize,
    /// Where the admitted photo's bytes can be fetched until released
    pub preview_url: String,
}

impl From<&PhotoAttachment> for PhotoAttachmentDto {
    fn from(p: &PhotoAttachment) -> Self {
        Self {
            id: p.id,
            file_name: p.file_name.clone(),
            content_type: p.content_type.clone(),
            byte_size: p.byte_size,
            preview_url: format!("/api/previews/{}", p.id),
        }
    }
}

/// Response DTO for the draft inside a session
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DraftDto {
    pub category: Option<ReportCategory>,
    pub address: String,
    pub pincode: String,
    pub district: String,
    pub state: String,
    pub reporter_name: String,
    pub photos: Vec<PhotoAttachmentDto>,
    pub description: String,
}

impl From<&ReportDraft> for DraftDto {
    fn from(d: &ReportDraft) -> Self {
        Self {
            category: d.category,
            address: d.address.clone(),
            pincode: d.pincode.clone(),
            district: d.district.clone(),
            state: d.state.clone(),
            reporter_name: d.reporter_name.clone(),
            photos: d.photos.iter().map(PhotoAttachmentDto::from).collect(),
            description: d.description.clone(),
        }
    }
}

/// Full session state, returned by every session endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionResponseDto {
    pub id: Uuid,
    pub status: SubmissionStatus,
    pub draft: DraftDto,
    /// Field name → message; empty when nothing is wrong so far
    pub errors: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReportSession> for SessionResponseDto {
    fn from(s: ReportSession) -> Self {
        Self {
            id: s.id,
            status: s.status,
            draft: DraftDto::from(&s.draft),
            errors: s.errors,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
