use super::{DependencyResolver, FacetIndexer, ParentTicketResolver};
use crate::catalog::domain::{BundleRecord, CatalogSnapshot, DependencyEdge, DependencyInfo};
use chrono::Utc;
use std::collections::HashMap;

/// SnapshotBuilder service deriving every index of a freshly fetched catalog
pub struct SnapshotBuilder;

impl SnapshotBuilder {
    /// Builds an immutable snapshot from fetched bundles and optional edges
    ///
    /// Bundle ids are made unique first: a later record with an id seen
    /// before replaces the earlier one but keeps its position. `None` edges
    /// mean the dependency source could not be read.
    pub fn build(bundles: Vec<BundleRecord>, edges: Option<Vec<DependencyEdge>>) -> CatalogSnapshot {
        let bundles = dedupe(bundles);
        let facets = FacetIndexer::index(&bundles);
        let parent_index = ParentTicketResolver::build_index(&bundles);
        let dependencies = match edges {
            Some(edges) => {
                DependencyResolver::resolve(&edges, bundles.iter().map(|b| b.id.as_str()))
            }
            None => DependencyInfo::Unavailable,
        };

        CatalogSnapshot::new(bundles, parent_index, facets, dependencies, Utc::now())
    }
}

fn dedupe(bundles: Vec<BundleRecord>) -> Vec<BundleRecord> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<BundleRecord> = Vec::with_capacity(bundles.len());

    for bundle in bundles {
        match positions.get(&bundle.id) {
            Some(&i) => unique[i] = bundle,
            None => {
                positions.insert(bundle.id.clone(), unique.len());
                unique.push(bundle);
            }
        }
    }

    unique
}
