#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::reports::dtos::UpdateDraftDto;
#[cfg(test)]
use crate::features::reports::models::{
    CandidatePhoto, PhotoAttachment, ReportCategory, ReportDraft,
};
#[cfg(test)]
use crate::features::reports::services::{
    DispatchOutcome, ReportDispatcher, ReportSessionService,
};
#[cfg(test)]
use crate::modules::storage::PreviewStore;

/// A draft that passes every field rule.
#[cfg(test)]
pub fn complete_draft() -> ReportDraft {
    ReportDraft {
        category: Some(ReportCategory::Potholes),
        address: "12 MG Road, near the flyover".to_string(),
        pincode: "560001".to_string(),
        district: "Bengaluru Urban".to_string(),
        state: "Karnataka".to_string(),
        reporter_name: "Asha Rao".to_string(),
        photos: vec![PhotoAttachment {
            id: Uuid::new_v4(),
            file_name: "pothole.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            byte_size: 1024,
        }],
        description: "Large pothole in the middle of the carriageway.".to_string(),
    }
}

/// Field edits that, together with one admitted photo, make a session's
/// draft pass validation.
#[cfg(test)]
pub fn complete_draft_update() -> UpdateDraftDto {
    UpdateDraftDto {
        category: Some(ReportCategory::Potholes),
        address: Some("12 MG Road, near the flyover".to_string()),
        pincode: Some("560001".to_string()),
        district: Some("Bengaluru Urban".to_string()),
        state: Some("Karnataka".to_string()),
        reporter_name: Some("Asha Rao".to_string()),
        description: Some("Large pothole in the middle of the carriageway.".to_string()),
    }
}

#[cfg(test)]
pub fn jpeg_candidate(name: &str, size: usize) -> CandidatePhoto {
    CandidatePhoto {
        file_name: name.to_string(),
        content_type: "image/jpeg".to_string(),
        data: vec![0u8; size],
    }
}

/// Dispatcher that resolves immediately with a fixed outcome.
#[cfg(test)]
pub struct StaticDispatcher(pub DispatchOutcome);

#[cfg(test)]
#[async_trait]
impl ReportDispatcher for StaticDispatcher {
    async fn dispatch(&self, _draft: &ReportDraft) -> DispatchOutcome {
        self.0
    }
}

/// Dispatcher that holds the submission in flight for a fixed delay.
#[cfg(test)]
pub struct SlowDispatcher {
    pub outcome: DispatchOutcome,
    pub delay: std::time::Duration,
}

#[cfg(test)]
#[async_trait]
impl ReportDispatcher for SlowDispatcher {
    async fn dispatch(&self, _draft: &ReportDraft) -> DispatchOutcome {
        tokio::time::sleep(self.delay).await;
        self.outcome
    }
}

/// A session service wired to the given dispatcher, plus a handle on its
/// preview store for assertions.
#[cfg(test)]
pub fn session_service(
    dispatcher: Arc<dyn ReportDispatcher>,
) -> (Arc<ReportSessionService>, Arc<PreviewStore>) {
    let previews = Arc::new(PreviewStore::new());
    let service = Arc::new(ReportSessionService::new(dispatcher, Arc::clone(&previews)));
    (service, previews)
}
