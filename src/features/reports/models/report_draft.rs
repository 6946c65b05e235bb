use std::collections::BTreeMap;

use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::validation::PINCODE_REGEX;

use super::ReportCategory;

/// Field name → human-readable message. Absence of a key means the field
/// is valid. A full validation pass replaces the whole map; only the
/// incremental photo-admission path writes a single key in place.
pub type FieldErrors = BTreeMap<String, String>;

/// Key under which photo-admission rejections are reported.
pub const PHOTOS_FIELD: &str = "photos";

/// Minimum trimmed length for the description field.
const MIN_DESCRIPTION_CHARS: usize = 20;

/// Metadata for a photo admitted to a draft.
///
/// The binary content lives in the preview store keyed by `id`; the draft
/// keeps only what validation and display need. `id` is the stable
/// identity used for removal and preview release, never the position in
/// the photo sequence.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PhotoAttachment {
    pub id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub byte_size: usize,
}

/// A photo offered for admission, before any checks have run.
#[derive(Debug, Clone)]
pub struct CandidatePhoto {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// An in-progress issue report, owned exclusively by one form session.
///
/// All eight field rules are evaluated independently; a validation pass
/// reports every violation at once rather than short-circuiting.
#[derive(Debug, Clone, Default, Validate)]
pub struct ReportDraft {
    #[validate(required(message = "Category is required."))]
    pub category: Option<ReportCategory>,

    #[validate(custom(function = required_text, message = "Address is required."))]
    pub address: String,

    #[validate(regex(path = *PINCODE_REGEX, message = "Pincode must be 6 digits."))]
    pub pincode: String,

    #[validate(custom(function = required_text, message = "District is required."))]
    pub district: String,

    #[validate(custom(function = required_text, message = "State is required."))]
    pub state: String,

    #[validate(custom(function = required_text, message = "Your name is required."))]
    pub reporter_name: String,

    #[validate(length(min = 1, message = "At least one photo is required."))]
    pub photos: Vec<PhotoAttachment>,

    #[validate(custom(
        function = long_enough_description,
        message = "Description must be at least 20 characters."
    ))]
    pub description: String,
}

impl ReportDraft {
    /// Run the full eight-field validation pass and flatten the outcome
    /// into the per-field message map the API exposes. An empty map means
    /// the draft is ready to submit.
    pub fn validate_fields(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => field_errors(&errors),
        }
    }
}

fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn long_enough_description(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::new("too_short"));
    }
    Ok(())
}

/// Flatten `validator` output into field → message. Only the first
/// message per field is kept; every rule here carries exactly one.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        if let Some(message) = field_errors.iter().find_map(|e| e.message.as_ref()) {
            out.insert(field.to_string(), message.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::complete_draft;

    #[test]
    fn complete_draft_is_valid() {
        let draft = complete_draft();
        assert!(draft.validate_fields().is_empty());
    }

    #[test]
    fn empty_draft_reports_every_field_at_once() {
        let errors = ReportDraft::default().validate_fields();

        assert_eq!(errors.len(), 8);
        assert_eq!(errors.get("category").unwrap(), "Category is required.");
        assert_eq!(errors.get("address").unwrap(), "Address is required.");
        assert_eq!(errors.get("pincode").unwrap(), "Pincode must be 6 digits.");
        assert_eq!(errors.get("district").unwrap(), "District is required.");
        assert_eq!(errors.get("state").unwrap(), "State is required.");
        assert_eq!(errors.get("reporter_name").unwrap(), "Your name is required.");
        assert_eq!(
            errors.get("photos").unwrap(),
            "At least one photo is required."
        );
        assert_eq!(
            errors.get("description").unwrap(),
            "Description must be at least 20 characters."
        );
    }

    #[test]
    fn pincode_must_be_exactly_six_digits() {
        let mut draft = complete_draft();

        draft.pincode = "12a456".to_string();
        assert!(draft.validate_fields().contains_key("pincode"));

        draft.pincode = "123456".to_string();
        assert!(!draft.validate_fields().contains_key("pincode"));

        draft.pincode = "1234567".to_string();
        assert!(draft.validate_fields().contains_key("pincode"));
    }

    #[test]
    fn description_boundary_is_twenty_trimmed_characters() {
        let mut draft = complete_draft();

        draft.description = "a".repeat(19);
        assert!(draft.validate_fields().contains_key("description"));

        draft.description = "a".repeat(20);
        assert!(!draft.validate_fields().contains_key("description"));

        // whitespace padding does not count towards the minimum
        draft.description = format!("  {}  ", "a".repeat(19));
        assert!(draft.validate_fields().contains_key("description"));
    }

    #[test]
    fn whitespace_only_text_fields_are_rejected() {
        let mut draft = complete_draft();
        draft.address = "   ".to_string();
        draft.reporter_name = "\t".to_string();

        let errors = draft.validate_fields();
        assert_eq!(errors.get("address").unwrap(), "Address is required.");
        assert_eq!(errors.get("reporter_name").unwrap(), "Your name is required.");
        assert!(!errors.contains_key("district"));
    }
}
