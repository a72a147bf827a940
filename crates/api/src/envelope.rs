//! Result envelopes returned by every entry point.

use serde::Serialize;
use veneer_store::RecordId;
use veneer_suggest::SuggestionReport;
use veneer_types::Suggestion;

/// `{success: false, message}` with `success` pinned to `false`.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    success: bool,
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Outcome of an entry point. Serializes untagged, so success payloads and
/// failures share the flat `{success, ...}` wire shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Envelope<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Envelope::Failure(Failure::new(message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    pub fn as_success(&self) -> Option<&T> {
        match self {
            Envelope::Success(payload) => Some(payload),
            Envelope::Failure(_) => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(failure) => Some(&failure.message),
        }
    }
}

/// Payload of `upgrade_status`.
#[derive(Debug, Clone, Serialize)]
pub struct UpgradeStatus {
    pub success: bool,
    pub update_available: bool,
    pub current_version: String,
    pub latest_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Payload of `upgrade_help`.
#[derive(Debug, Clone, Serialize)]
pub struct UpgradeHelp {
    pub success: bool,
    pub instructions: Vec<String>,
    pub backup_warning: String,
    pub support_url: String,
}

/// Payload of `suggestions`.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestions {
    pub success: bool,
    #[serde(flatten)]
    pub report: SuggestionReport,
}

/// Payload of `filtered_suggestions`.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredSuggestions {
    pub success: bool,
    pub suggestions: Vec<Suggestion>,
    pub total: usize,
}

/// Payload of `create_upgrade_check_record`.
#[derive(Debug, Clone, Serialize)]
pub struct RecordCreated {
    pub success: bool,
    pub message: String,
    pub name: RecordId,
}

/// Payload of `create_suggestions_records`.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsCreated {
    pub success: bool,
    pub message: String,
    pub suggestions: Vec<RecordId>,
}

/// Payload of state-changing actions that only need an acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct ActionDone {
    pub success: bool,
    pub message: String,
}
