use crate::core::error::{AppError, Result};
use crate::features::education::catalog::EDUCATION_TOPICS;
use crate::features::education::models::EducationTopic;

/// Read access to the static education catalog.
pub struct EducationService;

impl EducationService {
    pub fn new() -> Self {
        Self
    }

    /// All topics in catalog order.
    pub fn list(&self) -> &'static [EducationTopic] {
        EDUCATION_TOPICS
    }

    pub fn get_by_id(&self, id: &str) -> Result<&'static EducationTopic> {
        EDUCATION_TOPICS
            .iter()
            .find(|topic| topic.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Education topic '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_the_whole_catalog_in_order() {
        let service = EducationService::new();
        let topics = service.list();

        assert_eq!(topics.len(), 8);
        assert_eq!(topics[0].id, "woman-safety");
        assert_eq!(topics[7].id, "traffic");
    }

    #[test]
    fn finds_a_topic_by_id() {
        let service = EducationService::new();
        let topic = service.get_by_id("corruption").unwrap();

        assert_eq!(topic.title, "Fighting Corruption");
        assert!(topic.full_text.contains("Right to Information"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let service = EducationService::new();
        assert!(matches!(
            service.get_by_id("astrology"),
            Err(AppError::NotFound(_))
        ));
    }
}
