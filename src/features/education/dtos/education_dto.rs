use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::education::models::EducationTopic;

/// List entry: everything the card view needs, without the full text
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EducationTopicSummaryDto {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub short_description: String,
}

impl From<&EducationTopic> for EducationTopicSummaryDto {
    fn from(t: &EducationTopic) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title.to_string(),
            thumbnail: t.thumbnail.to_string(),
            short_description: t.short_description.to_string(),
        }
    }
}

/// Detail view of one topic, full text included
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EducationTopicResponseDto {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub short_description: String,
    pub full_text: String,
}

impl From<&EducationTopic> for EducationTopicResponseDto {
    fn from(t: &EducationTopic) -> Self {
        Self {
            id: t.id.to_string(),
            title: t.title.to_string(),
            thumbnail: t.thumbnail.to_string(),
            short_description: t.short_description.to_string(),
            full_text: t.full_text.to_string(),
        }
    }
}
