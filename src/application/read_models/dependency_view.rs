//! Dependency and ancestry views

use super::bundle_view::{BundleView, SnapshotView};
use serde::Serialize;

/// Replaces-graph neighbourhood of one bundle
///
/// When dependency data is unavailable the flags are `None` and both
/// lists are empty; that state is distinct from "no dependencies".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyView {
    pub snapshot: SnapshotView,
    pub bundle: BundleView,
    pub available: bool,
    pub independent: Option<bool>,
    pub latest_replacement: Option<bool>,
    /// Bundles this bundle replaces
    pub replaces: Vec<BundleView>,
    /// Bundles replacing this bundle
    pub replaced_by: Vec<BundleView>,
}

/// One parent ticket of a bundle's ancestry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentView {
    pub ticket: String,
    pub direct: bool,
    pub bundles: Vec<BundleView>,
}

/// "Based on" ancestry of one bundle, direct parents first
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentTreeView {
    pub snapshot: SnapshotView,
    pub bundle: BundleView,
    pub parents: Vec<ParentView>,
}
