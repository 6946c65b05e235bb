use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{
    is_photo_mime_type_allowed, UpdateDraftDto, MAX_PHOTO_SIZE, PHOTO_SIZE_ERROR, PHOTO_TYPE_ERROR,
};
use crate::features::reports::models::{
    CandidatePhoto, PhotoAttachment, ReportDraft, ReportSession, SubmissionStatus, PHOTOS_FIELD,
};
use crate::features::reports::services::{DispatchOutcome, ReportDispatcher};
use crate::modules::storage::{PreviewStore, StoredPhoto};

/// Drives the report form workflow for every live session.
///
/// Sessions are held in memory and each one owns its draft exclusively.
/// The submission state machine per session is:
///
///   idle --(submit, draft valid)--> submitting --> success | error
///
/// `success` and `error` are sticky until the next draft edit (back to
/// `idle`) or, from `error`, a retried submit. While a dispatch is
/// outstanding the session accepts no edits and no second submit, so at
/// most one submission is ever in flight per session.
pub struct ReportSessionService {
    sessions: RwLock<HashMap<Uuid, ReportSession>>,
    dispatcher: Arc<dyn ReportDispatcher>,
    previews: Arc<PreviewStore>,
}

impl ReportSessionService {
    pub fn new(dispatcher: Arc<dyn ReportDispatcher>, previews: Arc<PreviewStore>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            dispatcher,
            previews,
        }
    }

    pub async fn create_session(&self) -> ReportSession {
        let session = ReportSession::new();

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        tracing::info!("Report session created: {}", session.id);

        session
    }

    pub async fn get_session(&self, id: Uuid) -> Result<ReportSession> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Report session {} not found", id)))
    }

    /// Apply a partial edit to the draft's form fields.
    pub async fn update_draft(&self, id: Uuid, update: UpdateDraftDto) -> Result<ReportSession> {
        let mut sessions = self.sessions.write().await;
        let session = Self::session_mut(&mut sessions, id)?;
        Self::ensure_editable(session)?;

        let draft = &mut session.draft;
        if let Some(category) = update.category {
            draft.category = Some(category);
        }
        if let Some(address) = update.address {
            draft.address = address;
        }
        if let Some(pincode) = update.pincode {
            draft.pincode = pincode;
        }
        if let Some(district) = update.district {
            draft.district = district;
        }
        if let Some(state) = update.state {
            draft.state = state;
        }
        if let Some(reporter_name) = update.reporter_name {
            draft.reporter_name = reporter_name;
        }
        if let Some(description) = update.description {
            draft.description = description;
        }

        Self::rearm(session);
        session.updated_at = Utc::now();
        Ok(session.clone())
    }

    /// Admit a batch of candidate photos.
    ///
    /// Each candidate is judged independently; admitted ones are appended
    /// in presentation order, rejected ones are dropped silently. The last
    /// rejection in the batch becomes the shared `photos` message, and a
    /// clean batch clears a lingering one.
    pub async fn attach_photos(
        &self,
        id: Uuid,
        candidates: Vec<CandidatePhoto>,
    ) -> Result<ReportSession> {
        let mut sessions = self.sessions.write().await;
        let session = Self::session_mut(&mut sessions, id)?;
        Self::ensure_editable(session)?;

        let mut rejection: Option<&'static str> = None;
        for candidate in candidates {
            if let Err(reason) = Self::admit(&candidate) {
                tracing::debug!("Photo '{}' rejected: {}", candidate.file_name, reason);
                rejection = Some(reason);
                continue;
            }

            let byte_size = candidate.data.len();
            let photo_id = Uuid::new_v4();
            self.previews
                .put(
                    photo_id,
                    StoredPhoto {
                        content_type: candidate.content_type.clone(),
                        data: candidate.data,
                    },
                )
                .await;
            session.draft.photos.push(PhotoAttachment {
                id: photo_id,
                file_name: candidate.file_name,
                content_type: candidate.content_type,
                byte_size,
            });
        }

        match rejection {
            Some(reason) => {
                session
                    .errors
                    .insert(PHOTOS_FIELD.to_string(), reason.to_string());
            }
            None => {
                session.errors.remove(PHOTOS_FIELD);
            }
        }

        Self::rearm(session);
        session.updated_at = Utc::now();
        Ok(session.clone())
    }

    /// Remove one photo by its stable id and release exactly its preview.
    pub async fn remove_photo(&self, id: Uuid, photo_id: Uuid) -> Result<ReportSession> {
        let session = {
            let mut sessions = self.sessions.write().await;
            let session = Self::session_mut(&mut sessions, id)?;
            Self::ensure_editable(session)?;

            let index = session
                .draft
                .photos
                .iter()
                .position(|p| p.id == photo_id)
                .ok_or_else(|| {
                    AppError::NotFound(format!("Photo {} not found in session {}", photo_id, id))
                })?;
            session.draft.photos.remove(index);

            Self::rearm(session);
            session.updated_at = Utc::now();
            session.clone()
        };

        // Keyed by the attachment id, not its (shifted) position
        self.previews.release(photo_id).await;

        Ok(session)
    }

    /// Run the submission workflow once.
    ///
    /// A failing validation pass stores the field errors and leaves the
    /// session idle. A passing one claims the in-flight slot, dispatches a
    /// snapshot of the draft without holding the session lock, then applies
    /// the outcome: success consumes the draft and its previews, error
    /// keeps the draft intact for retry.
    pub async fn submit(&self, id: Uuid) -> Result<ReportSession> {
        let draft = {
            let mut sessions = self.sessions.write().await;
            let session = Self::session_mut(&mut sessions, id)?;
            if session.status == SubmissionStatus::Submitting {
                return Err(AppError::Conflict(format!(
                    "A submission is already in flight for session {}",
                    id
                )));
            }

            let errors = session.draft.validate_fields();
            if !errors.is_empty() {
                tracing::debug!(
                    "Submit for session {} blocked by {} field error(s)",
                    id,
                    errors.len()
                );
                session.errors = errors;
                session.status = SubmissionStatus::Idle;
                session.updated_at = Utc::now();
                return Ok(session.clone());
            }

            session.errors.clear();
            session.status = SubmissionStatus::Submitting;
            session.updated_at = Utc::now();
            session.draft.clone()
        };

        tracing::info!("Dispatching report for session {}", id);
        let outcome = self.dispatcher.dispatch(&draft).await;

        // The session may have been deleted while the dispatch was
        // outstanding; its previews were released with it.
        let mut released: Vec<Uuid> = Vec::new();
        let session = {
            let mut sessions = self.sessions.write().await;
            let session = Self::session_mut(&mut sessions, id)?;

            match outcome {
                DispatchOutcome::Accepted => {
                    released = session.draft.photos.iter().map(|p| p.id).collect();
                    session.draft = ReportDraft::default();
                    session.errors.clear();
                    session.status = SubmissionStatus::Success;
                    tracing::info!("Report session {} submitted successfully", id);
                }
                DispatchOutcome::Rejected => {
                    session.status = SubmissionStatus::Error;
                    tracing::warn!("Report session {} submission failed", id);
                }
            }
            session.updated_at = Utc::now();
            session.clone()
        };

        if !released.is_empty() {
            self.previews.release_all(&released).await;
        }

        Ok(session)
    }

    /// Discard a session, releasing every preview it still holds.
    pub async fn delete_session(&self, id: Uuid) -> Result<()> {
        let session = {
            let mut sessions = self.sessions.write().await;
            sessions
                .remove(&id)
                .ok_or_else(|| AppError::NotFound(format!("Report session {} not found", id)))?
        };

        let ids: Vec<Uuid> = session.draft.photos.iter().map(|p| p.id).collect();
        self.previews.release_all(&ids).await;
        tracing::info!("Report session deleted: {}", id);

        Ok(())
    }

    /// Look up the bytes backing an admitted photo's preview.
    pub async fn preview(&self, photo_id: Uuid) -> Result<StoredPhoto> {
        self.previews
            .get(photo_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Preview {} not found", photo_id)))
    }

    fn session_mut(
        sessions: &mut HashMap<Uuid, ReportSession>,
        id: Uuid,
    ) -> Result<&mut ReportSession> {
        sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Report session {} not found", id)))
    }

    fn ensure_editable(session: &ReportSession) -> Result<()> {
        if session.status == SubmissionStatus::Submitting {
            return Err(AppError::Conflict(format!(
                "A submission is in flight for session {}; the draft cannot change",
                session.id
            )));
        }
        Ok(())
    }

    /// A fresh edit after a settled outcome re-arms the form.
    fn rearm(session: &mut ReportSession) {
        if matches!(
            session.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            session.status = SubmissionStatus::Idle;
        }
    }

    fn admit(candidate: &CandidatePhoto) -> std::result::Result<(), &'static str> {
        if !is_photo_mime_type_allowed(&candidate.content_type) {
            return Err(PHOTO_TYPE_ERROR);
        }
        if candidate.data.len() > MAX_PHOTO_SIZE {
            return Err(PHOTO_SIZE_ERROR);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::shared::test_helpers::{
        complete_draft_update, jpeg_candidate, session_service, SlowDispatcher, StaticDispatcher,
    };

    async fn filled_session(service: &ReportSessionService) -> Uuid {
        let session = service.create_session().await;
        service
            .update_draft(session.id, complete_draft_update())
            .await
            .unwrap();
        service
            .attach_photos(session.id, vec![jpeg_candidate("proof.jpg", 1024)])
            .await
            .unwrap();
        session.id
    }

    #[tokio::test]
    async fn accepted_dispatch_consumes_draft_and_previews() {
        let (service, previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Accepted)));
        let id = filled_session(&service).await;
        assert_eq!(previews.count().await, 1);

        let session = service.submit(id).await.unwrap();

        assert_eq!(session.status, SubmissionStatus::Success);
        assert!(session.errors.is_empty());
        assert!(session.draft.photos.is_empty());
        assert_eq!(session.draft.address, "");
        assert_eq!(session.draft.category, None);
        assert_eq!(previews.count().await, 0);
    }

    #[tokio::test]
    async fn rejected_dispatch_keeps_draft_for_retry() {
        let (service, previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Rejected)));
        let id = filled_session(&service).await;

        let session = service.submit(id).await.unwrap();

        assert_eq!(session.status, SubmissionStatus::Error);
        assert_eq!(session.draft.photos.len(), 1);
        assert_eq!(session.draft.pincode, "560001");
        assert_eq!(previews.count().await, 1);

        // retry re-validates and dispatches again
        let session = service.submit(id).await.unwrap();
        assert_eq!(session.status, SubmissionStatus::Error);
        assert_eq!(session.draft.photos.len(), 1);
    }

    #[tokio::test]
    async fn invalid_draft_stays_idle_with_field_errors() {
        let (service, _previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Accepted)));
        let created = service.create_session().await;

        let session = service.submit(created.id).await.unwrap();

        assert_eq!(session.status, SubmissionStatus::Idle);
        assert_eq!(session.errors.len(), 8);
        assert_eq!(
            session.errors.get("pincode").unwrap(),
            "Pincode must be 6 digits."
        );
    }

    #[tokio::test]
    async fn gif_is_rejected_and_clean_batch_clears_the_message() {
        let (service, previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Accepted)));
        let created = service.create_session().await;

        let gif = CandidatePhoto {
            file_name: "clip.gif".to_string(),
            content_type: "image/gif".to_string(),
            data: vec![0u8; 64],
        };
        let session = service.attach_photos(created.id, vec![gif]).await.unwrap();

        assert!(session.draft.photos.is_empty());
        assert_eq!(session.errors.get(PHOTOS_FIELD).unwrap(), PHOTO_TYPE_ERROR);
        assert_eq!(previews.count().await, 0);

        let session = service
            .attach_photos(created.id, vec![jpeg_candidate("ok.jpg", 1024)])
            .await
            .unwrap();

        assert_eq!(session.draft.photos.len(), 1);
        assert!(session.errors.get(PHOTOS_FIELD).is_none());
        assert_eq!(previews.count().await, 1);
    }

    #[tokio::test]
    async fn oversize_photo_is_rejected_at_the_boundary() {
        let (service, _previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Accepted)));
        let created = service.create_session().await;

        let session = service
            .attach_photos(created.id, vec![jpeg_candidate("big.jpg", MAX_PHOTO_SIZE + 1)])
            .await
            .unwrap();
        assert!(session.draft.photos.is_empty());
        assert_eq!(session.errors.get(PHOTOS_FIELD).unwrap(), PHOTO_SIZE_ERROR);

        // exactly at the limit is admitted
        let session = service
            .attach_photos(created.id, vec![jpeg_candidate("edge.jpg", MAX_PHOTO_SIZE)])
            .await
            .unwrap();
        assert_eq!(session.draft.photos.len(), 1);
    }

    #[tokio::test]
    async fn last_rejection_in_a_batch_wins() {
        let (service, _previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Accepted)));
        let created = service.create_session().await;

        let gif = CandidatePhoto {
            file_name: "clip.gif".to_string(),
            content_type: "image/gif".to_string(),
            data: vec![0u8; 64],
        };
        let batch = vec![
            gif,
            jpeg_candidate("big.jpg", MAX_PHOTO_SIZE + 1),
            jpeg_candidate("ok.jpg", 512),
        ];

        let session = service.attach_photos(created.id, batch).await.unwrap();

        assert_eq!(session.draft.photos.len(), 1);
        assert_eq!(session.draft.photos[0].file_name, "ok.jpg");
        assert_eq!(session.errors.get(PHOTOS_FIELD).unwrap(), PHOTO_SIZE_ERROR);
    }

    #[tokio::test]
    async fn full_validation_overwrites_a_lingering_admission_message() {
        let (service, _previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Accepted)));
        let created = service.create_session().await;
        service
            .update_draft(created.id, complete_draft_update())
            .await
            .unwrap();

        let gif = CandidatePhoto {
            file_name: "clip.gif".to_string(),
            content_type: "image/gif".to_string(),
            data: vec![0u8; 64],
        };
        let session = service.attach_photos(created.id, vec![gif]).await.unwrap();
        assert_eq!(session.errors.get(PHOTOS_FIELD).unwrap(), PHOTO_TYPE_ERROR);

        // submit recomputes all eight rules; the photos entry now reports
        // the aggregate rule, not the stale admission message
        let session = service.submit(created.id).await.unwrap();
        assert_eq!(session.status, SubmissionStatus::Idle);
        assert_eq!(
            session.errors.get(PHOTOS_FIELD).unwrap(),
            "At least one photo is required."
        );
        assert_eq!(session.errors.len(), 1);
    }

    #[tokio::test]
    async fn removal_releases_the_matching_preview_even_after_shifts() {
        let (service, previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Accepted)));
        let created = service.create_session().await;

        let session = service
            .attach_photos(
                created.id,
                vec![
                    jpeg_candidate("a.jpg", 10),
                    jpeg_candidate("b.jpg", 20),
                    jpeg_candidate("c.jpg", 30),
                ],
            )
            .await
            .unwrap();
        let ids: Vec<Uuid> = session.draft.photos.iter().map(|p| p.id).collect();

        // removing the first shifts the others; removing the (former) third
        // must still free the entry belonging to that photo
        service.remove_photo(created.id, ids[0]).await.unwrap();
        let session = service.remove_photo(created.id, ids[2]).await.unwrap();

        assert_eq!(session.draft.photos.len(), 1);
        assert_eq!(session.draft.photos[0].id, ids[1]);
        assert_eq!(previews.count().await, 1);
        assert_eq!(previews.get(ids[1]).await.unwrap().data.len(), 20);
        assert!(previews.get(ids[0]).await.is_none());
        assert!(previews.get(ids[2]).await.is_none());
    }

    #[tokio::test]
    async fn settled_outcome_rearms_on_next_edit() {
        let (service, _previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Rejected)));
        let id = filled_session(&service).await;

        let session = service.submit(id).await.unwrap();
        assert_eq!(session.status, SubmissionStatus::Error);

        let update = UpdateDraftDto {
            address: Some("12 MG Road, near the flyover".to_string()),
            ..UpdateDraftDto::default()
        };
        let session = service.update_draft(id, update).await.unwrap();
        assert_eq!(session.status, SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn in_flight_submission_blocks_edits_and_resubmits() {
        let dispatcher = Arc::new(SlowDispatcher {
            outcome: DispatchOutcome::Accepted,
            delay: Duration::from_secs(2),
        });
        let (service, _previews) = session_service(dispatcher);
        let id = filled_session(&service).await;

        let in_flight = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit(id).await }
        });
        // let the spawned submit claim the in-flight slot
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        assert!(matches!(
            service.submit(id).await,
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            service.update_draft(id, complete_draft_update()).await,
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            service.attach_photos(id, vec![jpeg_candidate("late.jpg", 8)]).await,
            Err(AppError::Conflict(_))
        ));

        let session = in_flight.await.unwrap().unwrap();
        assert_eq!(session.status, SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn deleting_a_session_releases_its_previews() {
        let (service, previews) =
            session_service(Arc::new(StaticDispatcher(DispatchOutcome::Accepted)));
        let id = filled_session(&service).await;
        assert_eq!(previews.count().await, 1);

        service.delete_session(id).await.unwrap();

        assert_eq!(previews.count().await, 0);
        assert!(matches!(
            service.get_session(id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
