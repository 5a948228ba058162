/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (backend, file system, console).
pub mod catalog_source;
pub mod formatter;
pub mod managed_bundle_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod workflow_actions;
pub mod workflow_metadata_repository;

pub use catalog_source::CatalogSource;
pub use formatter::CatalogFormatter;
pub use managed_bundle_repository::ManagedBundleRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use workflow_actions::WorkflowActions;
pub use workflow_metadata_repository::WorkflowMetadataRepository;
