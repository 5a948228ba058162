use serde::{Deserialize, Serialize};

/// Status name the backend uses for bundles it cannot classify
pub const UNKNOWN_STATUS: &str = "UNKNOWN";

/// One workflow status as described by the `workflowMetadata` endpoint
///
/// `candidates` names the status whose bundles are candidates for this
/// one; `stage` is set for statuses that correspond to a delivery stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowMetadata {
    pub ord: u32,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub repo_suite_tag: Option<String>,
    #[serde(default)]
    pub trac_status: Option<String>,
    #[serde(default)]
    pub trac_resolution: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default, rename = "override")]
    pub allows_override: Option<bool>,
    #[serde(default)]
    pub candidates: Option<String>,
}

impl WorkflowMetadata {
    pub fn new(ord: u32, name: impl Into<String>) -> Self {
        Self {
            ord,
            name: name.into(),
            comment: None,
            repo_suite_tag: None,
            trac_status: None,
            trac_resolution: None,
            stage: None,
            allows_override: None,
            candidates: None,
        }
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    pub fn with_candidates(mut self, candidates: impl Into<String>) -> Self {
        self.candidates = Some(candidates.into());
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_STATUS
    }
}

/// A deployment target offered by the `configuredTargets` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescription {
    pub value: String,
    pub description: String,
}
