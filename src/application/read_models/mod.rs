//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of catalog data for output.

pub mod bundle_view;
pub mod catalog_read_model;
pub mod catalog_read_model_builder;
pub mod dependency_view;
pub mod workflow_view;

pub use bundle_view::{BundleView, SnapshotView};
pub use catalog_read_model::{CatalogReadModel, FacetValueView, FacetsView, SearchView};
pub use catalog_read_model_builder::CatalogReadModelBuilder;
pub use dependency_view::{DependencyView, ParentTreeView, ParentView};
pub use workflow_view::{
    ActionLogView, LaneView, ManagedBundleView, WorkflowBoardView, LOADING_SUBJECT,
};
