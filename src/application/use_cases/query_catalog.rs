use crate::application::dto::SearchRequest;
use crate::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
use crate::catalog::domain::{BundleRecord, CatalogSnapshot, DependencyType};
use crate::catalog::services::{BundleFilter, ParentTicketResolver};
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::sync::Arc;

/// QueryCatalogUseCase - read-only views over one published snapshot
///
/// Every query is synchronous and sees the same snapshot, however many
/// refreshes happen meanwhile.
pub struct QueryCatalogUseCase {
    snapshot: Arc<CatalogSnapshot>,
}

impl QueryCatalogUseCase {
    pub fn new(snapshot: Arc<CatalogSnapshot>) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    /// Bundles matching facet selection, show-only options and query
    pub fn search(&self, request: &SearchRequest) -> CatalogReadModel {
        let snapshot = self.snapshot.as_ref();
        let mut filter = BundleFilter::default()
            .with_selection(request.selection_for(snapshot.facets()))
            .with_query(&request.query);
        for kind in &request.show_only {
            filter = filter.with_show_only(*kind);
        }
        if let Some(id) = &request.selected_bundle {
            filter = filter.with_selected_bundle(id.as_str());
        }

        let ignored: Vec<DependencyType> = if snapshot.dependencies().is_available() {
            Vec::new()
        } else {
            filter.show_only.iter().copied().collect()
        };

        let bundles = filter.apply(snapshot);
        CatalogReadModelBuilder::search(snapshot, &request.query, &ignored, &bundles)
    }

    /// Facet option lists with the request's selection marked
    pub fn facets(&self, request: &SearchRequest) -> CatalogReadModel {
        let snapshot = self.snapshot.as_ref();
        CatalogReadModelBuilder::facets(
            snapshot,
            &request.selection_for(snapshot.facets()),
            &request.show_only_set(),
        )
    }

    /// Replaces and replaced-by lists of one bundle
    ///
    /// # Errors
    /// `CatalogError::UnknownBundle` when the id is not in the snapshot.
    pub fn dependencies(&self, id: &str) -> Result<CatalogReadModel> {
        let bundle = self.bundle(id)?;
        Ok(CatalogReadModelBuilder::dependencies(&self.snapshot, bundle))
    }

    /// Direct and transitive parent tickets of one bundle
    ///
    /// # Errors
    /// `CatalogError::UnknownBundle` when the id is not in the snapshot.
    pub fn parents(&self, id: &str) -> Result<CatalogReadModel> {
        let bundle = self.bundle(id)?;
        let parents = ParentTicketResolver::resolve(bundle, self.snapshot.parent_index());
        Ok(CatalogReadModelBuilder::parents(
            &self.snapshot,
            bundle,
            &parents,
        ))
    }

    fn bundle(&self, id: &str) -> Result<&BundleRecord> {
        self.snapshot.get(id).ok_or_else(|| {
            CatalogError::UnknownBundle { id: id.to_string() }.into()
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
            BundleRecord::new("bundle:bionic/1")
                .with_status("PRODUCTION")
                .with_target("plus")
                .with_subject("Security fixes")
                .with_creator("smith")
                .with_ticket("100"),
            BundleRecord::new("bundle:bionic/2")
                .with_status("DROPPED")
                .with_target("plus")
                .with_subject("Abandoned")
                .with_creator("jones"),
            BundleRecord::new("bundle:bionic/42")
                .with_status("NEW")
                .with_target("plus")
                .with_subject("Kernel update")
                .with_creator("smith")
                .with_parent_tickets(["100"]),
            BundleRecord::new("garbage")
                .with_status("NEW")
                .with_target("unknown"),
        ]
    }

    fn use_case(with_edges: bool) -> QueryCatalogUseCase {
        let edges = with_edges.then(|| {
            vec![DependencyEdge::new("bundle:bionic/42", "bundle:bionic/1")]
        });
        QueryCatalogUseCase::new(Arc::new(SnapshotBuilder::build(bundles(), edges)))
    }

    fn ids(model: &CatalogReadModel) -> Vec<String> {
        match model {
            CatalogReadModel::Search(view) => view.bundles.iter().map(|b| b.id.clone()).collect(),
            _ => panic!("expected search view"),
        }
    }

    #[test]
    fn test_default_search_excludes_dropped_and_malformed() {
        let model = use_case(false).search(&SearchRequest::new(""));
        assert_eq!(ids(&model), vec!["bundle:bionic/1", "bundle:bionic/42"]);
    }

    #[test]
    fn test_search_tokens_combine() {
        let model = use_case(false).search(&SearchRequest::new("42 smith"));
        assert_eq!(ids(&model), vec!["bundle:bionic/42"]);
    }

    #[test]
    fn test_search_unknown_distribution_bucket() {
        let request = SearchRequest::new("").with_distributions(vec!["unknown".to_string()]);
        let model = use_case(false).search(&request);
        assert_eq!(ids(&model), vec!["garbage"]);
    }

    #[test]
    fn test_show_only_ignored_without_dependencies() {
        let request =
            SearchRequest::new("").with_show_only(vec![DependencyType::LatestReplacements]);
        let model = use_case(false).search(&request);

        let CatalogReadModel::Search(view) = &model else {
            panic!("expected search view");
        };
        assert_eq!(view.bundles.len(), 2);
        assert_eq!(view.ignored_show_only, vec!["Latest Replacements"]);
    }

    #[test]
    fn test_show_only_independent() {
        let request =
            SearchRequest::new("").with_show_only(vec![DependencyType::IndependentBundles]);
        let model = use_case(true).search(&request);
        assert_eq!(ids(&model), vec!["bundle:bionic/1"]);
    }

    #[test]
    fn test_selected_bundle_overrides_filters() {
        let request = SearchRequest::new("nothing matches this")
            .with_selected_bundle(Some("bundle:bionic/2".to_string()));
        let model = use_case(false).search(&request);
        assert_eq!(ids(&model), vec!["bundle:bionic/2"]);
    }

    #[test]
    fn test_dependencies_of_unknown_bundle() {
        let error = use_case(true).dependencies("bundle:bionic/9").unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CatalogError>(),
            Some(CatalogError::UnknownBundle { id }) if id == "bundle:bionic/9"
        ));
    }

    #[test]
    fn test_parents_of_bundle() {
        let model = use_case(false).parents("bundle:bionic/42").unwrap();
        let CatalogReadModel::Parents(view) = model else {
            panic!("expected parents view");
        };
        assert_eq!(view.parents.len(), 1);
        assert_eq!(view.parents[0].ticket, "100");
    }

    #[test]
    fn test_facets_counts_every_bundle() {
        let model = use_case(true).facets(&SearchRequest::new(""));
        let CatalogReadModel::Facets(view) = model else {
            panic!("expected facets view");
        };
        let total: usize = view.status.iter().map(|v| v.count).sum();
        assert_eq!(total, 4);
        assert!(view.dependency_types.is_some());
    }
}
