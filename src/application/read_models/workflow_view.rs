//! Workflow board views

use crate::catalog::domain::BackendLogEntry;
use serde::Serialize;

/// Placeholder subject shown while a bundle's details are still loading
pub const LOADING_SUBJECT: &str = "…loading…";

/// One managed bundle on the workflow board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedBundleView {
    pub id: String,
    pub distribution: String,
    pub target: String,
    pub ticket: String,
    pub ticket_url: String,
    /// Whether the details below were loaded
    pub loaded: bool,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub based_on: Option<String>,
}

impl ManagedBundleView {
    pub fn subject_or_placeholder(&self) -> &str {
        match (&self.subject, self.loaded) {
            (Some(subject), true) => subject,
            (None, true) => "",
            (_, false) => LOADING_SUBJECT,
        }
    }
}

/// One workflow column
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneView {
    pub status: String,
    pub ord: u32,
    pub stage: Option<String>,
    pub comment: Option<String>,
    pub valid_stage: bool,
    /// Statuses the bundles of this column can be promoted to
    pub candidates: Vec<String>,
    pub drop_status: Option<String>,
    pub shows_content: bool,
    pub bundle_count: usize,
    pub bundles: Vec<ManagedBundleView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowBoardView {
    pub configured_stages: Vec<String>,
    pub lanes: Vec<LaneView>,
}

/// Log a workflow action produced on the backend
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogView {
    pub action: String,
    pub entries: Vec<BackendLogEntry>,
}

impl ActionLogView {
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(BackendLogEntry::is_error)
    }
}
