pub mod backend_log;
pub mod bundle_id;
pub mod bundle_record;
pub mod dependency_graph;
pub mod facets;
pub mod managed_bundle;
pub mod parent_reference;
pub mod snapshot;
pub mod workflow;

pub use backend_log::BackendLogEntry;
pub use bundle_id::{BundleId, UNKNOWN_DISTRIBUTION};
pub use bundle_record::BundleRecord;
pub use dependency_graph::{DependencyEdge, DependencyGraph, DependencyInfo, DependencyType};
pub use facets::{FacetIndex, FacetSelection, DROPPED_STATUS};
pub use managed_bundle::{InfoState, ManagedBundle, ManagedBundleInfo};
pub use parent_reference::ParentReference;
pub use snapshot::{CatalogSnapshot, ParentTicketIndex};
pub use workflow::{TargetDescription, WorkflowMetadata, UNKNOWN_STATUS};
