use crate::catalog::domain::{ManagedBundle, ManagedBundleInfo};
use crate::ports::outbound::ManagedBundleRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingManagedBundleRepository wraps a ManagedBundleRepository and caches
/// bundle details by id.
///
/// Only the slow per-bundle details are cached; the managed bundle list
/// itself is always fetched fresh. The cache is thread-safe so concurrent
/// chunk requests can share it.
pub struct CachingManagedBundleRepository<R: ManagedBundleRepository> {
    inner: R,
    cache: Arc<DashMap<String, ManagedBundleInfo>>,
}

impl<R: ManagedBundleRepository> CachingManagedBundleRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Drops every cached detail, e.g. after a workflow action changed them
    pub fn clear(&self) {
        self.cache.clear();
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: ManagedBundleRepository> ManagedBundleRepository for CachingManagedBundleRepository<R> {
    async fn fetch_managed_bundles(&self) -> Result<Vec<ManagedBundle>> {
        self.inner.fetch_managed_bundles().await
    }

    async fn fetch_managed_bundle_info(&self, id: &str) -> Result<ManagedBundleInfo> {
        if let Some(cached) = self.cache.get(id) {
            return Ok(cached.clone());
        }

        let info = self.inner.fetch_managed_bundle_info(id).await?;
        self.cache.insert(id.to_string(), info.clone());
        Ok(info)
    }

    async fn fetch_managed_bundle_infos(&self, ids: &[String]) -> Result<Vec<ManagedBundleInfo>> {
        let missing: Vec<String> = ids
            .iter()
            .filter(|id| !self.cache.contains_key(id.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() {
            for info in self.inner.fetch_managed_bundle_infos(&missing).await? {
                self.cache.insert(info.id().to_string(), info);
            }
        }

        Ok(ids
            .iter()
            .filter_map(|id| self.cache.get(id.as_str()).map(|entry| entry.clone()))
            .collect())
    }
}
