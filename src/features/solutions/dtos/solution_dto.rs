use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::reports::models::ReportCategory;
use crate::features::solutions::models::Solution;

/// Query params for searching solutions
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchSolutionsQuery {
    /// Free-text term matched against titles and steps (case-insensitive)
    #[serde(default)]
    pub q: String,

    /// Category label, or "all" (the default) for no category filter
    pub category: Option<String>,
}

/// Response DTO for one remediation guide
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SolutionResponseDto {
    pub id: String,
    pub category: ReportCategory,
    pub title: String,
    pub thumbnail: String,
    pub steps: Vec<String>,
}

impl From<&Solution> for SolutionResponseDto {
    fn from(s: &Solution) -> Self {
        Self {
            id: s.id.to_string(),
            category: s.category,
            title: s.title.to_string(),
            thumbnail: s.thumbnail.to_string(),
            steps: s.steps.iter().map(|step| step.to_string()).collect(),
        }
    }
}
