use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::education::dtos::{EducationTopicResponseDto, EducationTopicSummaryDto};
use crate::features::education::services::EducationService;
use crate::shared::types::{ApiResponse, Meta};

/// List all education topics
#[utoipa::path(
    get,
    path = "/api/education",
    responses(
        (status = 200, description = "List of topics", body = ApiResponse<Vec<EducationTopicSummaryDto>>),
    ),
    tag = "education"
)]
pub async fn list_topics(
    State(service): State<Arc<EducationService>>,
) -> Result<Json<ApiResponse<Vec<EducationTopicSummaryDto>>>> {
    let topics: Vec<EducationTopicSummaryDto> =
        service.list().iter().map(Into::into).collect();
    let total = topics.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(topics),
        None,
        Some(Meta { total }),
    )))
}

/// Get one topic with its full text
#[utoipa::path(
    get,
    path = "/api/education/{id}",
    params(
        ("id" = String, Path, description = "Topic id")
    ),
    responses(
        (status = 200, description = "Topic found", body = ApiResponse<EducationTopicResponseDto>),
        (status = 404, description = "Topic not found")
    ),
    tag = "education"
)]
pub async fn get_topic(
    State(service): State<Arc<EducationService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<EducationTopicResponseDto>>> {
    let topic = service.get_by_id(&id)?;
    Ok(Json(ApiResponse::success(Some(topic.into()), None, None)))
}
