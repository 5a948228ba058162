//! bundle-catalog - query and workflow client for reprepro bundle catalogs
//!
//! This library fetches the bundle list of a bundle backend into an
//! immutable snapshot and answers search, facet, dependency and
//! parent-ticket queries over it. It also drives the backend's workflow
//! of managed bundles. The code follows hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Snapshot model and pure query services
//! - **Application Layer** (`application`): Use cases, read models and services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bundle_catalog::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let reader = SnapshotDirectoryReader::new("catalog-export");
//! let refresh = RefreshCatalogUseCase::new(
//!     reader,
//!     SnapshotStore::new(),
//!     StderrProgressReporter::new(),
//! );
//! let outcome = refresh.execute().await?;
//!
//! let query = QueryCatalogUseCase::new(outcome.snapshot);
//! let model = query.search(&SearchRequest::new("42 smith"));
//!
//! let output = JsonFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, SnapshotDirectoryReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{BackendClient, CachingManagedBundleRepository};
    pub use crate::application::dto::{
        OutputFormat, SearchRequest, WorkflowActionRequest, WorkflowBoardRequest,
    };
    pub use crate::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
    pub use crate::application::services::{ManagedBundleDirectory, MessageLog, SnapshotStore};
    pub use crate::application::use_cases::{
        QueryCatalogUseCase, RefreshCatalogUseCase, WorkflowActionUseCase, WorkflowBoardUseCase,
    };
    pub use crate::catalog::domain::{
        BackendLogEntry, BundleId, BundleRecord, CatalogSnapshot, DependencyEdge, DependencyInfo,
        DependencyType, FacetIndex, FacetSelection, ManagedBundle, ManagedBundleInfo,
        ParentReference, WorkflowMetadata,
    };
    pub use crate::catalog::services::{
        BundleFilter, DependencyResolver, FacetIndexer, ParentTicketResolver, SearchQuery,
        SnapshotBuilder, WorkflowPlanner,
    };
    pub use crate::ports::outbound::{
        CatalogFormatter, CatalogSource, ManagedBundleRepository, OutputPresenter,
        ProgressReporter, WorkflowActions, WorkflowMetadataRepository,
    };
    pub use crate::shared::Result;
}
