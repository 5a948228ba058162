use super::{BundleRecord, DependencyInfo, FacetIndex};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Index from parent ticket to the bundles declaring it
pub type ParentTicketIndex = HashMap<String, Vec<BundleRecord>>;

/// Immutable bundle catalog together with every index derived from it
///
/// A snapshot is never mutated after construction. Refreshing the catalog
/// builds a new snapshot and hands it to consumers as a whole.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    bundles: Vec<BundleRecord>,
    positions: HashMap<String, usize>,
    parent_index: ParentTicketIndex,
    facets: FacetIndex,
    dependencies: DependencyInfo,
    fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(
        bundles: Vec<BundleRecord>,
        parent_index: ParentTicketIndex,
        facets: FacetIndex,
        dependencies: DependencyInfo,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        let positions = bundles
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();
        Self {
            bundles,
            positions,
            parent_index,
            facets,
            dependencies,
            fetched_at,
        }
    }

    /// Bundles in the order the source delivered them
    pub fn bundles(&self) -> &[BundleRecord] {
        &self.bundles
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BundleRecord> {
        self.positions.get(id).map(|&i| &self.bundles[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facets
    }

    pub fn dependencies(&self) -> &DependencyInfo {
        &self.dependencies
    }

    pub fn parent_index(&self) -> &ParentTicketIndex {
        &self.parent_index
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn bundles_for_parent(&self, ticket: &str) -> &[BundleRecord] {
        self.parent_index
            .get(ticket)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Bundles replaced by `id`, or `None` while dependency data is unavailable
    pub fn dependencies_of(&self, id: &str) -> Option<Vec<&BundleRecord>> {
        let graph = self.dependencies.graph()?;
        Some(self.resolve_ids(graph.dependencies_of(id)))
    }

    /// Bundles replacing `id`, or `None` while dependency data is unavailable
    pub fn replaced_by(&self, id: &str) -> Option<Vec<&BundleRecord>> {
        let graph = self.dependencies.graph()?;
        Some(self.resolve_ids(graph.replaced_by(id)))
    }

    fn resolve_ids(&self, ids: &[String]) -> Vec<&BundleRecord> {
        ids.iter().filter_map(|id| self.get(id)).collect()
    }
}
