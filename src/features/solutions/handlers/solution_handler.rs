use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::ReportCategory;
use crate::features::solutions::dtos::{SearchSolutionsQuery, SolutionResponseDto};
use crate::features::solutions::services::SolutionService;
use crate::shared::types::{ApiResponse, Meta};

/// Search the solutions catalog
///
/// Without parameters this lists the whole catalog. `q` narrows by
/// case-insensitive substring over titles and steps, `category` by exact
/// category; both together intersect.
#[utoipa::path(
    get,
    path = "/api/solutions",
    params(SearchSolutionsQuery),
    responses(
        (status = 200, description = "Matching solutions in catalog order", body = ApiResponse<Vec<SolutionResponseDto>>),
        (status = 400, description = "Unknown category label")
    ),
    tag = "solutions"
)]
pub async fn search_solutions(
    State(service): State<Arc<SolutionService>>,
    Query(query): Query<SearchSolutionsQuery>,
) -> Result<Json<ApiResponse<Vec<SolutionResponseDto>>>> {
    let category = match query.category.as_deref() {
        None | Some("all") | Some("") => None,
        Some(label) => Some(ReportCategory::from_label(label).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown category '{}'", label))
        })?),
    };

    let matches = service.search(&query.q, category);
    let total = matches.len() as i64;
    let solutions: Vec<SolutionResponseDto> = matches.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(solutions),
        None,
        Some(Meta { total }),
    )))
}
