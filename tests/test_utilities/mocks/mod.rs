/// Mock implementations for testing
mod mock_catalog_source;
mod mock_progress_reporter;
mod mock_workflow_backend;

pub use mock_catalog_source::MockCatalogSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_workflow_backend::MockWorkflowBackend;
