use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{FieldErrors, ReportDraft};

/// Lifecycle of a form session's submission attempt.
///
/// `Success` and `Error` are sticky until the next draft edit (back to
/// `Idle`) or, from `Error`, a retried submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Submitting => write!(f, "submitting"),
            SubmissionStatus::Success => write!(f, "success"),
            SubmissionStatus::Error => write!(f, "error"),
        }
    }
}

/// One user's continuous interaction with the report form, from first
/// input to reset. The session owns its draft exclusively.
#[derive(Debug, Clone)]
pub struct ReportSession {
    pub id: Uuid,
    pub draft: ReportDraft,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReportSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            draft: ReportDraft::default(),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
            created_at: now,
            updated_at: now,
        }
    }
}
