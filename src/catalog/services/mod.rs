pub mod bundle_filter;
pub mod dependency_resolver;
pub mod facet_indexer;
pub mod parent_ticket_resolver;
pub mod search_filter;
pub mod snapshot_builder;
pub mod workflow_planner;

pub use bundle_filter::BundleFilter;
pub use dependency_resolver::DependencyResolver;
pub use facet_indexer::FacetIndexer;
pub use parent_ticket_resolver::ParentTicketResolver;
pub use search_filter::{leading_integer, SearchQuery};
pub use snapshot_builder::SnapshotBuilder;
pub use workflow_planner::{LaneFilter, LaneSelection, StageLane, WorkflowPlanner};
