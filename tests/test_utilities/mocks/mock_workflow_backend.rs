use async_trait::async_trait;
use bundle_catalog::catalog::domain::TargetDescription;
use bundle_catalog::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock of the workflow side of the backend
///
/// Clones share their recorded calls, so one clone can be handed to a use
/// case while the test inspects another.
#[derive(Clone, Default)]
pub struct MockWorkflowBackend {
    workflow: Vec<WorkflowMetadata>,
    stages: Vec<String>,
    targets: Vec<String>,
    bundles: Vec<ManagedBundle>,
    action_log: Vec<BackendLogEntry>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockWorkflowBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: WorkflowMetadata) -> Self {
        self.workflow.push(status);
        self
    }

    pub fn with_stage(mut self, stage: &str) -> Self {
        self.stages.push(stage.to_string());
        self
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.targets.push(target.to_string());
        self
    }

    pub fn with_managed_bundle(mut self, id: &str, status: &str, target: &str) -> Self {
        let distribution = BundleId::dist_or_unknown(id);
        self.bundles.push(ManagedBundle {
            id: id.to_string(),
            distribution,
            status: WorkflowMetadata::new(0, status),
            target: target.to_string(),
            ticket: String::new(),
            ticket_url: String::new(),
        });
        self
    }

    pub fn with_action_log(mut self, entries: Vec<BackendLogEntry>) -> Self {
        self.action_log = entries;
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ManagedBundleRepository for MockWorkflowBackend {
    async fn fetch_managed_bundles(&self) -> Result<Vec<ManagedBundle>> {
        self.record("managedBundles".to_string());
        Ok(self.bundles.clone())
    }

    async fn fetch_managed_bundle_info(&self, id: &str) -> Result<ManagedBundleInfo> {
        self.record(format!("managedBundleInfo {}", id));
        let managed_bundle = self
            .bundles
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown bundle {}", id))?;
        Ok(ManagedBundleInfo {
            managed_bundle,
            based_on: None,
            subject: format!("Subject of {}", id),
            creator: "maintainer".to_string(),
        })
    }
}

#[async_trait]
impl WorkflowMetadataRepository for MockWorkflowBackend {
    async fn fetch_workflow_metadata(&self) -> Result<Vec<WorkflowMetadata>> {
        Ok(self.workflow.clone())
    }

    async fn fetch_configured_stages(&self) -> Result<Vec<String>> {
        Ok(self.stages.clone())
    }

    async fn fetch_configured_targets(&self) -> Result<Vec<TargetDescription>> {
        Ok(self
            .targets
            .iter()
            .map(|t| TargetDescription {
                value: t.clone(),
                description: t.to_uppercase(),
            })
            .collect())
    }
}

#[async_trait]
impl WorkflowActions for MockWorkflowBackend {
    async fn mark_for_status(
        &self,
        status: &str,
        bundle_ids: &[String],
    ) -> Result<Vec<BackendLogEntry>> {
        self.record(format!("markForStatus {} {}", status, bundle_ids.join(",")));
        Ok(self.action_log.clone())
    }

    async fn set_target(
        &self,
        target: &str,
        bundle_ids: &[String],
    ) -> Result<Vec<BackendLogEntry>> {
        self.record(format!("setTarget {} {}", target, bundle_ids.join(",")));
        Ok(self.action_log.clone())
    }

    async fn undo_last_change(&self) -> Result<Vec<BackendLogEntry>> {
        self.record("undoLastChange".to_string());
        Ok(self.action_log.clone())
    }

    async fn publish_changes(&self) -> Result<Vec<BackendLogEntry>> {
        self.record("publishChanges".to_string());
        Ok(self.action_log.clone())
    }
}
