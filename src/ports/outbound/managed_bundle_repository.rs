use crate::catalog::domain::{ManagedBundle, ManagedBundleInfo};
use crate::shared::Result;
use async_trait::async_trait;

/// ManagedBundleRepository port for the bundles under workflow management
///
/// The bundle list is cheap; the per-bundle details are not, so they are
/// requested separately and in small batches.
#[async_trait]
pub trait ManagedBundleRepository: Send + Sync {
    /// Fetches every managed bundle
    async fn fetch_managed_bundles(&self) -> Result<Vec<ManagedBundle>>;

    /// Fetches the details of one managed bundle
    ///
    /// # Errors
    /// Returns an error if the request fails or the id is unknown to the
    /// backend.
    async fn fetch_managed_bundle_info(&self, id: &str) -> Result<ManagedBundleInfo>;

    /// Fetches the details of several bundles
    ///
    /// The default implementation requests them one after another and
    /// skips ids that fail. Results keep the order of `ids`.
    async fn fetch_managed_bundle_infos(&self, ids: &[String]) -> Result<Vec<ManagedBundleInfo>> {
        let mut infos = Vec::with_capacity(ids.len());
        for id in ids {
            if let Ok(info) = self.fetch_managed_bundle_info(id).await {
                infos.push(info);
            }
        }
        Ok(infos)
    }
}
