//! Catalog read model for query operations
//!
//! One variant per CLI view; formatters render whichever they are given.

use super::bundle_view::{BundleView, SnapshotView};
use super::dependency_view::{DependencyView, ParentTreeView};
use super::workflow_view::{ActionLogView, WorkflowBoardView};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum CatalogReadModel {
    Search(SearchView),
    Facets(FacetsView),
    Dependencies(DependencyView),
    Parents(ParentTreeView),
    Workflow(WorkflowBoardView),
    ActionLog(ActionLogView),
}

impl CatalogReadModel {
    /// Number of result rows, used for `--fail-on-empty`
    pub fn result_count(&self) -> usize {
        match self {
            CatalogReadModel::Search(view) => view.bundles.len(),
            CatalogReadModel::Facets(view) => view.snapshot.bundle_count,
            CatalogReadModel::Dependencies(view) => view.replaces.len() + view.replaced_by.len(),
            CatalogReadModel::Parents(view) => view.parents.len(),
            CatalogReadModel::Workflow(view) => view.lanes.iter().map(|l| l.bundles.len()).sum(),
            CatalogReadModel::ActionLog(view) => view.entries.len(),
        }
    }
}

/// Result of a bundle search
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub snapshot: SnapshotView,
    pub query: String,
    /// Show-only filters that were requested but could not be applied
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_show_only: Vec<String>,
    pub bundles: Vec<BundleView>,
}

/// Count of one facet value and whether it is part of the selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetValueView {
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

/// Filter option lists of a snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetsView {
    pub snapshot: SnapshotView,
    pub status: Vec<FacetValueView>,
    pub target: Vec<FacetValueView>,
    pub distribution: Vec<FacetValueView>,
    /// `None` while dependency data is unavailable
    pub dependency_types: Option<Vec<FacetValueView>>,
}
