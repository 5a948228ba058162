use crate::catalog::domain::{BundleRecord, DependencyEdge};
use crate::shared::Result;
use async_trait::async_trait;

/// CatalogSource port for fetching a bundle catalog snapshot
///
/// This port abstracts where `bundles.json` and `bundle-deps.json` come
/// from (the backend over HTTP, or an exported directory on disk).
///
/// # Async Support
/// Implementations must be `Send + Sync` so that both lists can be
/// fetched concurrently.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the bundle list
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be reached or read
    /// - The payload is not a JSON array of bundle records
    async fn fetch_bundles(&self) -> Result<Vec<BundleRecord>>;

    /// Fetches the optional dependency edge list
    ///
    /// Pairs that are not two element arrays are skipped.
    ///
    /// # Errors
    /// Returns an error if the edge list cannot be fetched or parsed.
    /// Callers treat this as "no dependency data", never as fatal.
    async fn fetch_dependency_edges(&self) -> Result<Vec<DependencyEdge>>;
}
