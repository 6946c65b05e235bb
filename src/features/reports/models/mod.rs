mod report_category;
mod report_draft;
mod session;

pub use report_category::ReportCategory;
pub use report_draft::{
    CandidatePhoto, FieldErrors, PhotoAttachment, ReportDraft, PHOTOS_FIELD,
};
pub use session::{ReportSession, SubmissionStatus};
