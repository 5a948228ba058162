use crate::catalog::domain::BackendLogEntry;
use crate::shared::Result;
use async_trait::async_trait;

/// WorkflowActions port for state-changing backend calls
///
/// Every action answers with the log the backend produced while running
/// it. Actions are never retried.
#[async_trait]
pub trait WorkflowActions: Send + Sync {
    /// Moves `bundle_ids` to the workflow status `status`
    async fn mark_for_status(
        &self,
        status: &str,
        bundle_ids: &[String],
    ) -> Result<Vec<BackendLogEntry>>;

    /// Assigns the deployment target `target` to `bundle_ids`
    async fn set_target(
        &self,
        target: &str,
        bundle_ids: &[String],
    ) -> Result<Vec<BackendLogEntry>>;

    /// Reverts the most recent unpublished change
    async fn undo_last_change(&self) -> Result<Vec<BackendLogEntry>>;

    /// Publishes all pending changes
    async fn publish_changes(&self) -> Result<Vec<BackendLogEntry>>;
}
