use crate::catalog::domain::{BundleId, BundleRecord, FacetIndex};
use std::collections::BTreeMap;

/// FacetIndexer service counting facet values for filter option lists
///
/// Pure function of its input. Records whose id does not parse are left
/// out of the distribution facet only.
pub struct FacetIndexer;

impl FacetIndexer {
    pub fn index(bundles: &[BundleRecord]) -> FacetIndex {
        let mut index = FacetIndex::default();

        for bundle in bundles {
            increment(&mut index.status, &bundle.status);
            increment(&mut index.target, &bundle.target);
            if let Some(id) = BundleId::parse(&bundle.id) {
                increment(&mut index.distribution, id.dist());
            }
        }

        index
    }
}

fn increment(counts: &mut BTreeMap<String, usize>, key: &str) {
    *counts.entry(key.to_string()).or_insert(0) += 1;
}
