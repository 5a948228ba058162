//! Builder for constructing CatalogReadModel from domain objects

use super::bundle_view::{bundle_views, BundleView, SnapshotView};
use super::catalog_read_model::{CatalogReadModel, FacetValueView, FacetsView, SearchView};
use super::dependency_view::{DependencyView, ParentTreeView, ParentView};
use super::workflow_view::{ActionLogView, LaneView, ManagedBundleView, WorkflowBoardView};
use crate::catalog::domain::{
    BackendLogEntry, BundleRecord, CatalogSnapshot, DependencyType, FacetSelection,
    ManagedBundle, ManagedBundleInfo, ParentReference,
};
use crate::catalog::services::StageLane;
use std::collections::{BTreeMap, BTreeSet};

/// Builder turning snapshots and service results into read models
pub struct CatalogReadModelBuilder;

impl CatalogReadModelBuilder {
    pub fn search(
        snapshot: &CatalogSnapshot,
        query: &str,
        ignored_show_only: &[DependencyType],
        bundles: &[&BundleRecord],
    ) -> CatalogReadModel {
        CatalogReadModel::Search(SearchView {
            snapshot: SnapshotView::from(snapshot),
            query: query.to_string(),
            ignored_show_only: ignored_show_only.iter().map(|t| t.to_string()).collect(),
            bundles: bundle_views(bundles.iter().copied()),
        })
    }

    /// Facet option lists, marking the values of `selection` and `show_only`
    pub fn facets(
        snapshot: &CatalogSnapshot,
        selection: &FacetSelection,
        show_only: &BTreeSet<DependencyType>,
    ) -> CatalogReadModel {
        let facets = snapshot.facets();
        let dependency_types = snapshot.dependencies().graph().map(|graph| {
            graph
                .type_counts()
                .into_iter()
                .map(|(kind, count)| FacetValueView {
                    value: kind.to_string(),
                    count,
                    selected: show_only.contains(&kind),
                })
                .collect()
        });

        CatalogReadModel::Facets(FacetsView {
            snapshot: SnapshotView::from(snapshot),
            status: Self::facet_values(&facets.status, &selection.statuses),
            target: Self::facet_values(&facets.target, &selection.targets),
            distribution: Self::facet_values(&facets.distribution, &selection.distributions),
            dependency_types,
        })
    }

    fn facet_values(
        counts: &BTreeMap<String, usize>,
        selected: &BTreeSet<String>,
    ) -> Vec<FacetValueView> {
        counts
            .iter()
            .map(|(value, count)| FacetValueView {
                value: value.clone(),
                count: *count,
                selected: selected.contains(value),
            })
            .collect()
    }

    pub fn dependencies(snapshot: &CatalogSnapshot, bundle: &BundleRecord) -> CatalogReadModel {
        let graph = snapshot.dependencies().graph();

        CatalogReadModel::Dependencies(DependencyView {
            snapshot: SnapshotView::from(snapshot),
            bundle: BundleView::from(bundle),
            available: graph.is_some(),
            independent: graph.map(|g| g.is_independent(&bundle.id)),
            latest_replacement: graph.map(|g| g.is_latest_replacement(&bundle.id)),
            replaces: bundle_views(snapshot.dependencies_of(&bundle.id).unwrap_or_default()),
            replaced_by: bundle_views(snapshot.replaced_by(&bundle.id).unwrap_or_default()),
        })
    }

    pub fn parents(
        snapshot: &CatalogSnapshot,
        bundle: &BundleRecord,
        parents: &[ParentReference],
    ) -> CatalogReadModel {
        CatalogReadModel::Parents(ParentTreeView {
            snapshot: SnapshotView::from(snapshot),
            bundle: BundleView::from(bundle),
            parents: parents
                .iter()
                .map(|parent| ParentView {
                    ticket: parent.parent.clone(),
                    direct: parent.is_direct,
                    bundles: bundle_views(&parent.bundles),
                })
                .collect(),
        })
    }

    /// Workflow board from planned lanes
    ///
    /// `info` looks up the loaded details of a bundle; bundles without
    /// details are rendered as still loading.
    pub fn workflow<'a, F>(
        configured_stages: &[String],
        lanes: &[StageLane<'_>],
        info: F,
    ) -> CatalogReadModel
    where
        F: Fn(&str) -> Option<&'a ManagedBundleInfo>,
    {
        let lanes = lanes
            .iter()
            .map(|lane| LaneView {
                status: lane.status.name.clone(),
                ord: lane.status.ord,
                stage: lane.status.stage.clone(),
                comment: lane.status.comment.clone(),
                valid_stage: lane.valid_stage,
                candidates: lane.candidates.iter().map(|s| s.name.clone()).collect(),
                drop_status: lane.drop_status.map(|s| s.name.clone()),
                shows_content: lane.shows_content,
                bundle_count: lane.bundles.len(),
                bundles: lane
                    .bundles
                    .iter()
                    .map(|bundle| Self::managed_bundle_view(bundle, info(&bundle.id)))
                    .collect(),
            })
            .collect();

        CatalogReadModel::Workflow(WorkflowBoardView {
            configured_stages: configured_stages.to_vec(),
            lanes,
        })
    }

    fn managed_bundle_view(
        bundle: &ManagedBundle,
        info: Option<&ManagedBundleInfo>,
    ) -> ManagedBundleView {
        ManagedBundleView {
            id: bundle.id.clone(),
            distribution: bundle.distribution.clone(),
            target: bundle.target.clone(),
            ticket: bundle.ticket.clone(),
            ticket_url: bundle.ticket_url.clone(),
            loaded: info.is_some(),
            subject: info.map(|i| i.subject.clone()),
            creator: info.map(|i| i.creator.clone()),
            based_on: info.and_then(|i| i.based_on.clone()),
        }
    }

    pub fn action_log(action: &str, entries: Vec<BackendLogEntry>) -> CatalogReadModel {
        CatalogReadModel::ActionLog(ActionLogView {
            action: action.to_string(),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{DependencyEdge, WorkflowMetadata};
    use crate::catalog::services::{LaneFilter, ParentTicketResolver, SnapshotBuilder, WorkflowPlanner};

    fn snapshot(with_edges: bool) -> CatalogSnapshot {
        let bundles = vec![
            BundleRecord::new("bundle:foo/1")
                .with_status("PRODUCTION")
                .with_target("plus")
                .with_parent_tickets(["7"]),
            BundleRecord::new("bundle:foo/2")
                .with_status("DROPPED")
                .with_target("plus")
                .with_parent_tickets(["7", "8"]),
        ];
        let edges = with_edges.then(|| vec![DependencyEdge::new("bundle:foo/2", "bundle:foo/1")]);
        SnapshotBuilder::build(bundles, edges)
    }

    #[test]
    fn test_search_view() {
        let snapshot = snapshot(false);
        let bundles: Vec<&BundleRecord> = snapshot.bundles().iter().collect();
        let model = CatalogReadModelBuilder::search(
            &snapshot,
            "foo",
            &[DependencyType::LatestReplacements],
            &bundles,
        );

        let CatalogReadModel::Search(view) = &model else {
            panic!("expected search view");
        };
        assert_eq!(view.bundles.len(), 2);
        assert_eq!(view.ignored_show_only, vec!["Latest Replacements"]);
        assert!(!view.snapshot.dependencies_available);
        assert_eq!(model.result_count(), 2);

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["view"], "search");
        assert_eq!(json["bundles"][0]["id"], "bundle:foo/1");
    }

    #[test]
    fn test_facets_view_marks_selection() {
        let snapshot = snapshot(true);
        let selection = FacetSelection::defaults(snapshot.facets());
        let show_only = BTreeSet::from([DependencyType::IndependentBundles]);
        let model = CatalogReadModelBuilder::facets(&snapshot, &selection, &show_only);

        let CatalogReadModel::Facets(view) = model else {
            panic!("expected facets view");
        };
        let dropped = view.status.iter().find(|v| v.value == "DROPPED").unwrap();
        assert!(!dropped.selected);
        assert_eq!(dropped.count, 1);

        let types = view.dependency_types.unwrap();
        assert_eq!(types[0].value, "Independent Bundles");
        assert_eq!(types[0].count, 1);
        assert!(types[0].selected);
        assert!(!types[1].selected);
    }

    #[test]
    fn test_facets_view_without_dependency_data() {
        let snapshot = snapshot(false);
        let selection = FacetSelection::all(snapshot.facets());
        let model = CatalogReadModelBuilder::facets(&snapshot, &selection, &BTreeSet::new());
        let CatalogReadModel::Facets(view) = model else {
            panic!("expected facets view");
        };
        assert!(view.dependency_types.is_none());
    }

    #[test]
    fn test_dependency_view() {
        let snapshot = snapshot(true);
        let bundle = snapshot.get("bundle:foo/2").unwrap();
        let CatalogReadModel::Dependencies(view) =
            CatalogReadModelBuilder::dependencies(&snapshot, bundle)
        else {
            panic!("expected dependency view");
        };
        assert!(view.available);
        assert_eq!(view.independent, Some(false));
        assert_eq!(view.latest_replacement, Some(true));
        assert_eq!(view.replaces[0].id, "bundle:foo/1");
        assert!(view.replaced_by.is_empty());
    }

    #[test]
    fn test_dependency_view_unavailable() {
        let snapshot = snapshot(false);
        let bundle = snapshot.get("bundle:foo/2").unwrap();
        let CatalogReadModel::Dependencies(view) =
            CatalogReadModelBuilder::dependencies(&snapshot, bundle)
        else {
            panic!("expected dependency view");
        };
        assert!(!view.available);
        assert!(view.independent.is_none());
        assert!(view.replaces.is_empty());
    }

    #[test]
    fn test_parents_view() {
        let snapshot = snapshot(false);
        let bundle = snapshot.get("bundle:foo/1").unwrap();
        let parents = ParentTicketResolver::resolve(bundle, snapshot.parent_index());
        let CatalogReadModel::Parents(view) =
            CatalogReadModelBuilder::parents(&snapshot, bundle, &parents)
        else {
            panic!("expected parents view");
        };
        assert_eq!(view.parents.len(), 2);
        assert_eq!(view.parents[0].ticket, "7");
        assert!(view.parents[0].direct);
        assert_eq!(view.parents[0].bundles.len(), 2);
        assert_eq!(view.parents[1].ticket, "8");
        assert!(!view.parents[1].direct);
    }

    #[test]
    fn test_workflow_view_marks_loading_bundles() {
        let planner = WorkflowPlanner::new(
            vec![WorkflowMetadata::new(1, "NEW")],
            vec!["test".to_string()],
        );
        let bundles = vec![ManagedBundle {
            id: "bundle:bionic/1".to_string(),
            distribution: "bionic".to_string(),
            status: WorkflowMetadata::new(1, "NEW"),
            target: "plus".to_string(),
            ticket: String::new(),
            ticket_url: String::new(),
        }];
        let lanes = planner.stage_lanes(&bundles, &LaneFilter::all(&bundles));
        let model = CatalogReadModelBuilder::workflow(planner.configured_stages(), &lanes, |_| None);

        let CatalogReadModel::Workflow(view) = model else {
            panic!("expected workflow view");
        };
        assert_eq!(view.lanes.len(), 1);
        assert_eq!(view.lanes[0].bundle_count, 1);
        assert!(!view.lanes[0].bundles[0].loaded);
    }

    #[test]
    fn test_action_log_view() {
        let model = CatalogReadModelBuilder::action_log(
            "undo",
            vec![BackendLogEntry::info("reverted")],
        );
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["view"], "actionLog");
        assert_eq!(json["entries"][0]["message"], "reverted");
    }
}
