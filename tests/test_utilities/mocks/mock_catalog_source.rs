use async_trait::async_trait;
use bundle_catalog::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mock CatalogSource serving fixed bundles and edges
///
/// Either document can be switched to fail, to exercise degraded refreshes.
#[derive(Default)]
pub struct MockCatalogSource {
    bundles: Vec<BundleRecord>,
    edges: Vec<DependencyEdge>,
    fail_bundles: AtomicBool,
    fail_edges: AtomicBool,
    fetch_count: AtomicUsize,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(mut self, bundle: BundleRecord) -> Self {
        self.bundles.push(bundle);
        self
    }

    pub fn with_edge(mut self, from: &str, to: &str) -> Self {
        self.edges.push(DependencyEdge::new(from, to));
        self
    }

    pub fn without_edges(self) -> Self {
        self.fail_edges.store(true, Ordering::SeqCst);
        self
    }

    pub fn set_bundles_failing(&self, failing: bool) {
        self.fail_bundles.store(failing, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_bundles(&self) -> Result<Vec<BundleRecord>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_bundles.load(Ordering::SeqCst) {
            anyhow::bail!("mock backend unavailable");
        }
        Ok(self.bundles.clone())
    }

    async fn fetch_dependency_edges(&self) -> Result<Vec<DependencyEdge>> {
        if self.fail_edges.load(Ordering::SeqCst) {
            anyhow::bail!("mock bundle-deps.json missing");
        }
        Ok(self.edges.clone())
    }
}
