use crate::catalog::domain::{TargetDescription, WorkflowMetadata};
use crate::shared::Result;
use async_trait::async_trait;

/// WorkflowMetadataRepository port for the backend's workflow description
#[async_trait]
pub trait WorkflowMetadataRepository: Send + Sync {
    /// Every workflow status the backend knows about
    async fn fetch_workflow_metadata(&self) -> Result<Vec<WorkflowMetadata>>;

    /// Stage names configured for this installation (e.g. `test`, `prod`)
    async fn fetch_configured_stages(&self) -> Result<Vec<String>>;

    /// Deployment targets a bundle can be assigned to
    async fn fetch_configured_targets(&self) -> Result<Vec<TargetDescription>>;
}
