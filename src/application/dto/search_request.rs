use crate::catalog::domain::{DependencyType, FacetIndex, FacetSelection, DROPPED_STATUS};
use std::collections::BTreeSet;

/// SearchRequest - Internal request DTO for the bundle search use case
///
/// Facet overrides left empty fall back to the default selection: every
/// value known to the snapshot, minus `excluded_statuses` unless
/// `include_all_statuses` is set.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Free-text query, tokens separated by single spaces
    pub query: String,
    pub statuses: Vec<String>,
    pub targets: Vec<String>,
    pub distributions: Vec<String>,
    /// Statuses hidden by the default selection
    pub excluded_statuses: Vec<String>,
    pub include_all_statuses: bool,
    pub show_only: Vec<DependencyType>,
    /// Restricts the result to this bundle when it exists
    pub selected_bundle: Option<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            statuses: Vec::new(),
            targets: Vec::new(),
            distributions: Vec::new(),
            excluded_statuses: vec![DROPPED_STATUS.to_string()],
            include_all_statuses: false,
            show_only: Vec::new(),
            selected_bundle: None,
        }
    }
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_statuses(mut self, statuses: Vec<String>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_distributions(mut self, distributions: Vec<String>) -> Self {
        self.distributions = distributions;
        self
    }

    pub fn with_excluded_statuses(mut self, excluded: Vec<String>) -> Self {
        self.excluded_statuses = excluded;
        self
    }

    pub fn with_all_statuses(mut self, include_all: bool) -> Self {
        self.include_all_statuses = include_all;
        self
    }

    pub fn with_show_only(mut self, show_only: Vec<DependencyType>) -> Self {
        self.show_only = show_only;
        self
    }

    pub fn with_selected_bundle(mut self, id: Option<String>) -> Self {
        self.selected_bundle = id;
        self
    }

    /// Resolves the facet selection against the values of a snapshot
    pub fn selection_for(&self, index: &FacetIndex) -> FacetSelection {
        let mut selection = if self.include_all_statuses {
            FacetSelection::all(index)
        } else {
            FacetSelection::excluding_statuses(index, &self.excluded_statuses)
        };

        if !self.statuses.is_empty() {
            selection.statuses = self.statuses.iter().cloned().collect();
        }
        if !self.targets.is_empty() {
            selection.targets = self.targets.iter().cloned().collect();
        }
        if !self.distributions.is_empty() {
            selection.distributions = self.distributions.iter().cloned().collect();
        }
        selection
    }

    pub fn show_only_set(&self) -> BTreeSet<DependencyType> {
        self.show_only.iter().copied().collect()
    }
}
