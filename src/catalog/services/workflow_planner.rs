use crate::catalog::domain::{ManagedBundle, WorkflowMetadata, DROPPED_STATUS};
use serde::Serialize;
use std::collections::BTreeSet;

const PRODUCTION_STATUS: &str = "PRODUCTION";
const STAGING_STATUS: &str = "STAGING";

/// Which groups of workflow columns to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaneSelection {
    /// Statuses on a configured stage, and statuses feeding one
    pub stages_and_candidates: bool,
    /// Every other status
    pub others: bool,
}

impl LaneSelection {
    pub fn all() -> Self {
        Self {
            stages_and_candidates: true,
            others: true,
        }
    }
}

/// Lane selection plus the distributions and targets to keep inside lanes
#[derive(Debug, Clone, Default)]
pub struct LaneFilter {
    pub lanes: LaneSelection,
    pub distributions: BTreeSet<String>,
    pub targets: BTreeSet<String>,
}

impl LaneFilter {
    /// Everything visible, as on first load
    pub fn all(bundles: &[ManagedBundle]) -> Self {
        Self {
            lanes: LaneSelection::all(),
            distributions: WorkflowPlanner::available_distributions(bundles),
            targets: WorkflowPlanner::available_targets(bundles),
        }
    }

    fn keeps(&self, bundle: &ManagedBundle) -> bool {
        self.distributions.contains(&bundle.distribution) && self.targets.contains(&bundle.target)
    }
}

/// One column of the workflow board
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageLane<'a> {
    pub status: &'a WorkflowMetadata,
    pub valid_stage: bool,
    /// Stages this status can be promoted to
    pub candidates: Vec<&'a WorkflowMetadata>,
    pub drop_status: Option<&'a WorkflowMetadata>,
    pub shows_content: bool,
    pub bundles: Vec<&'a ManagedBundle>,
}

/// WorkflowPlanner service over the backend's workflow description
#[derive(Debug, Clone, Default)]
pub struct WorkflowPlanner {
    workflow: Vec<WorkflowMetadata>,
    configured_stages: Vec<String>,
}

impl WorkflowPlanner {
    pub fn new(mut workflow: Vec<WorkflowMetadata>, configured_stages: Vec<String>) -> Self {
        workflow.sort_by_key(|status| status.ord);
        Self {
            workflow,
            configured_stages,
        }
    }

    pub fn workflow(&self) -> &[WorkflowMetadata] {
        &self.workflow
    }

    pub fn configured_stages(&self) -> &[String] {
        &self.configured_stages
    }

    pub fn status(&self, name: &str) -> Option<&WorkflowMetadata> {
        self.workflow.iter().find(|status| status.name == name)
    }

    pub fn status_names(&self) -> Vec<&str> {
        self.workflow.iter().map(|s| s.name.as_str()).collect()
    }

    /// Every status but `UNKNOWN`, in `ord` order
    pub fn visible_workflow(&self) -> impl Iterator<Item = &WorkflowMetadata> {
        self.workflow.iter().filter(|status| !status.is_unknown())
    }

    pub fn is_valid_stage(&self, status: &WorkflowMetadata) -> bool {
        status
            .stage
            .as_ref()
            .is_some_and(|stage| self.configured_stages.contains(stage))
    }

    pub fn candidates_for(&self, status: &WorkflowMetadata) -> Vec<&WorkflowMetadata> {
        self.workflow
            .iter()
            .filter(|st| {
                self.is_valid_stage(st) && st.candidates.as_deref() == Some(status.name.as_str())
            })
            .collect()
    }

    pub fn drop_status(&self, status: &WorkflowMetadata) -> Option<&WorkflowMetadata> {
        match status.name.as_str() {
            DROPPED_STATUS | PRODUCTION_STATUS | STAGING_STATUS => None,
            _ => self.status(DROPPED_STATUS),
        }
    }

    pub fn shows_content(&self, status: &WorkflowMetadata) -> bool {
        !matches!(status.name.as_str(), DROPPED_STATUS | STAGING_STATUS)
    }

    /// Columns to render under `filter`, each with its bundles in list order
    pub fn stage_lanes<'a>(
        &'a self,
        bundles: &'a [ManagedBundle],
        filter: &LaneFilter,
    ) -> Vec<StageLane<'a>> {
        self.visible_workflow()
            .filter(|status| {
                let staged = self.is_valid_stage(status) || !self.candidates_for(status).is_empty();
                (filter.lanes.stages_and_candidates && staged) || filter.lanes.others
            })
            .map(|status| StageLane {
                status,
                valid_stage: self.is_valid_stage(status),
                candidates: self.candidates_for(status),
                drop_status: self.drop_status(status),
                shows_content: self.shows_content(status),
                bundles: bundles
                    .iter()
                    .filter(|b| b.status.name == status.name && filter.keeps(b))
                    .collect(),
            })
            .collect()
    }

    pub fn available_distributions(bundles: &[ManagedBundle]) -> BTreeSet<String> {
        bundles.iter().map(|b| b.distribution.clone()).collect()
    }

    pub fn available_targets(bundles: &[ManagedBundle]) -> BTreeSet<String> {
        bundles.iter().map(|b| b.target.clone()).collect()
    }
}
