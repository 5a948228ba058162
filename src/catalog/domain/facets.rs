use super::BundleRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Status hidden by the default selection (soft-deleted bundles)
pub const DROPPED_STATUS: &str = "DROPPED";

/// Per-facet value counts over one snapshot
///
/// Ordered maps keep the option lists stable between refreshes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    pub status: BTreeMap<String, usize>,
    pub target: BTreeMap<String, usize>,
    pub distribution: BTreeMap<String, usize>,
}

impl FacetIndex {
    pub fn status_total(&self) -> usize {
        self.status.values().sum()
    }

    pub fn target_total(&self) -> usize {
        self.target.values().sum()
    }

    pub fn distribution_total(&self) -> usize {
        self.distribution.values().sum()
    }
}

/// Selected values per facet
///
/// A bundle passes when its status, target and distribution are all
/// selected. Malformed ids are checked against the `unknown` bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    pub statuses: BTreeSet<String>,
    pub targets: BTreeSet<String>,
    pub distributions: BTreeSet<String>,
}

impl FacetSelection {
    /// Every known value selected
    pub fn all(index: &FacetIndex) -> Self {
        Self {
            statuses: index.status.keys().cloned().collect(),
            targets: index.target.keys().cloned().collect(),
            distributions: index.distribution.keys().cloned().collect(),
        }
    }

    /// Every known value selected except `DROPPED`
    pub fn defaults(index: &FacetIndex) -> Self {
        Self::excluding_statuses(index, &[DROPPED_STATUS.to_string()])
    }

    /// Every known value selected except the given statuses
    pub fn excluding_statuses(index: &FacetIndex, excluded: &[String]) -> Self {
        let mut selection = Self::all(index);
        for status in excluded {
            selection.statuses.remove(status);
        }
        selection
    }

    pub fn matches(&self, bundle: &BundleRecord) -> bool {
        self.statuses.contains(&bundle.status)
            && self.targets.contains(&bundle.target)
            && self.distributions.contains(&bundle.distribution())
    }
}
