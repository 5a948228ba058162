use super::search_filter::SearchQuery;
use crate::catalog::domain::{
    BundleRecord, CatalogSnapshot, DependencyGraph, DependencyType, FacetSelection,
};
use std::collections::BTreeSet;

/// Every criterion of the bundle search view
///
/// A selected bundle overrides everything else: when it names a bundle of
/// the snapshot, the result is exactly that bundle.
#[derive(Debug, Clone, Default)]
pub struct BundleFilter {
    pub selection: FacetSelection,
    pub show_only: BTreeSet<DependencyType>,
    pub query: SearchQuery,
    pub selected_bundle: Option<String>,
}

impl BundleFilter {
    /// Filter with the default facet selection of `snapshot` and nothing else
    pub fn defaults_for(snapshot: &CatalogSnapshot) -> Self {
        Self {
            selection: FacetSelection::defaults(snapshot.facets()),
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selection: FacetSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_show_only(mut self, kind: DependencyType) -> Self {
        self.show_only.insert(kind);
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = SearchQuery::parse(query);
        self
    }

    pub fn with_selected_bundle(mut self, id: impl Into<String>) -> Self {
        self.selected_bundle = Some(id.into());
        self
    }

    /// Bundles passing every criterion, in snapshot order
    pub fn apply<'a>(&self, snapshot: &'a CatalogSnapshot) -> Vec<&'a BundleRecord> {
        if let Some(selected) = self
            .selected_bundle
            .as_deref()
            .and_then(|id| snapshot.get(id))
        {
            return vec![selected];
        }

        let graph = snapshot.dependencies().graph();
        snapshot
            .bundles()
            .iter()
            .filter(|bundle| self.selection.matches(bundle))
            .filter(|bundle| graph.is_none_or(|g| self.passes_show_only(g, bundle)))
            .filter(|bundle| self.query.matches(bundle))
            .collect()
    }

    fn passes_show_only(&self, graph: &DependencyGraph, bundle: &BundleRecord) -> bool {
        self.show_only.iter().all(|kind| match kind {
            DependencyType::IndependentBundles => !graph.has_dependencies(&bundle.id),
            DependencyType::LatestReplacements => graph.is_latest_replacement(&bundle.id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::DependencyEdge;
    use crate::catalog::services::SnapshotBuilder;

    fn bundles() -> Vec<BundleRecord> {
        vec![
            BundleRecord::new("bundle:foo/1")
                .with_status("DROPPED")
                .with_target("plus"),
            BundleRecord::new("bundle:foo/2")
                .with_status("PRODUCTION")
                .with_target("plus"),
            BundleRecord::new("bundle:foo/3")
                .with_status("PRODUCTION")
                .with_target("plus")
                .with_creator("smith"),
        ]
    }

    fn ids<'a>(records: &[&'a BundleRecord]) -> Vec<&'a str> {
        records.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_default_selection_hides_dropped() {
        let snapshot = SnapshotBuilder::build(bundles()[..2].to_vec(), None);
        let filter = BundleFilter::defaults_for(&snapshot);
        assert_eq!(ids(&filter.apply(&snapshot)), vec!["bundle:foo/2"]);
    }

    #[test]
    fn test_query_combines_with_selection() {
        let snapshot = SnapshotBuilder::build(bundles(), None);
        let filter = BundleFilter::defaults_for(&snapshot).with_query("smith");
        assert_eq!(ids(&filter.apply(&snapshot)), vec!["bundle:foo/3"]);
    }

    #[test]
    fn test_show_only_ignored_without_dependency_data() {
        let snapshot = SnapshotBuilder::build(bundles(), None);
        let filter = BundleFilter::defaults_for(&snapshot)
            .with_show_only(DependencyType::LatestReplacements);
        assert_eq!(
            ids(&filter.apply(&snapshot)),
            vec!["bundle:foo/2", "bundle:foo/3"]
        );
    }

    #[test]
    fn test_show_only_latest_and_independent() {
        let edges = vec![DependencyEdge::new("bundle:foo/3", "bundle:foo/2")];
        let snapshot = SnapshotBuilder::build(bundles(), Some(edges));

        let latest = BundleFilter::defaults_for(&snapshot)
            .with_show_only(DependencyType::LatestReplacements);
        assert_eq!(ids(&latest.apply(&snapshot)), vec!["bundle:foo/3"]);

        let independent = BundleFilter::defaults_for(&snapshot)
            .with_show_only(DependencyType::IndependentBundles);
        assert_eq!(ids(&independent.apply(&snapshot)), vec!["bundle:foo/2"]);

        let both = latest.with_show_only(DependencyType::IndependentBundles);
        assert!(both.apply(&snapshot).is_empty());
    }

    #[test]
    fn test_selected_bundle_short_circuits() {
        let snapshot = SnapshotBuilder::build(bundles(), None);
        let filter = BundleFilter::defaults_for(&snapshot)
            .with_query("nothing-matches-this")
            .with_selected_bundle("bundle:foo/1");
        assert_eq!(ids(&filter.apply(&snapshot)), vec!["bundle:foo/1"]);
    }

    #[test]
    fn test_unknown_selected_bundle_falls_back_to_filters() {
        let snapshot = SnapshotBuilder::build(bundles(), None);
        let filter = BundleFilter::defaults_for(&snapshot).with_selected_bundle("bundle:foo/99");
        assert_eq!(filter.apply(&snapshot).len(), 2);
    }
}
