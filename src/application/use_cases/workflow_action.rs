use crate::application::dto::WorkflowActionRequest;
use crate::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
use crate::application::services::MessageLog;
use crate::catalog::domain::BackendLogEntry;
use crate::catalog::services::WorkflowPlanner;
use crate::ports::outbound::{ProgressReporter, WorkflowActions, WorkflowMetadataRepository};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Result of a submitted workflow action
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub model: CatalogReadModel,
    /// The backend's log of the action
    pub messages: MessageLog,
}

/// WorkflowActionUseCase - validates and submits workflow changes
///
/// Arguments are checked before anything is sent: marking and retargeting
/// need at least one bundle, marking needs a status the workflow knows and
/// retargeting a configured target. Actions are sent exactly once.
pub struct WorkflowActionUseCase<WR, WA, PR> {
    workflow_metadata: WR,
    actions: WA,
    progress_reporter: PR,
}

impl<WR, WA, PR> WorkflowActionUseCase<WR, WA, PR>
where
    WR: WorkflowMetadataRepository,
    WA: WorkflowActions,
    PR: ProgressReporter,
{
    pub fn new(workflow_metadata: WR, actions: WA, progress_reporter: PR) -> Self {
        Self {
            workflow_metadata,
            actions,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: WorkflowActionRequest) -> Result<ActionOutcome> {
        self.validate(&request).await?;
        self.progress_reporter
            .report(&format!("📤 Submitting: {}", request));

        let entries = match &request {
            WorkflowActionRequest::MarkForStatus { status, bundles } => {
                self.actions.mark_for_status(status, bundles).await?
            }
            WorkflowActionRequest::SetTarget { target, bundles } => {
                self.actions.set_target(target, bundles).await?
            }
            WorkflowActionRequest::UndoLastChange => self.actions.undo_last_change().await?,
            WorkflowActionRequest::PublishChanges => self.actions.publish_changes().await?,
        };

        let mut messages = MessageLog::new();
        messages.set_entries(entries.clone());
        messages.report_to(&self.progress_reporter);

        Ok(ActionOutcome {
            model: CatalogReadModelBuilder::action_log(&request.to_string(), entries),
            messages,
        })
    }

    async fn validate(&self, request: &WorkflowActionRequest) -> Result<()> {
        match request {
            WorkflowActionRequest::MarkForStatus { status, bundles } => {
                require_bundles(bundles)?;
                let workflow = self.workflow_metadata.fetch_workflow_metadata().await?;
                let planner = WorkflowPlanner::new(workflow, Vec::new());
                if planner.status(status).is_none() {
                    return Err(CatalogError::UnknownStatus {
                        name: status.clone(),
                        known: planner.status_names().join(", "),
                    }
                    .into());
                }
            }
            WorkflowActionRequest::SetTarget { target, bundles } => {
                require_bundles(bundles)?;
                let targets = self.workflow_metadata.fetch_configured_targets().await?;
                if !targets.is_empty() && !targets.iter().any(|t| &t.value == target) {
                    let known: Vec<&str> = targets.iter().map(|t| t.value.as_str()).collect();
                    return Err(CatalogError::Validation {
                        message: format!(
                            "Unknown target: {}. Configured targets are: {}",
                            target,
                            known.join(", ")
                        ),
                    }
                    .into());
                }
            }
            WorkflowActionRequest::UndoLastChange | WorkflowActionRequest::PublishChanges => {}
        }
        Ok(())
    }
}

fn require_bundles(bundles: &[String]) -> Result<()> {
    if bundles.is_empty() {
        return Err(CatalogError::Validation {
            message: "at least one bundle id is required".to_string(),
        }
        .into());
    }
    Ok(())
}

impl ActionOutcome {
    /// Entries the backend logged at ERROR level
    pub fn errors(&self) -> Vec<&BackendLogEntry> {
        self.messages
            .entries()
            .iter()
            .filter(|entry| entry.is_error())
            .collect()
    }
}
