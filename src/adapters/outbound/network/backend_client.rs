use crate::catalog::domain::{
    BackendLogEntry, BundleRecord, DependencyEdge, ManagedBundle, ManagedBundleInfo,
    TargetDescription, WorkflowMetadata,
};
use crate::ports::outbound::{
    CatalogSource, ManagedBundleRepository, WorkflowActions, WorkflowMetadataRepository,
};
use crate::shared::error::CatalogError;
use crate::shared::security::validate_url_component;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BUNDLES_PATH: &str = "bundles.json";
pub const DEFAULT_DEPENDENCIES_PATH: &str = "bundle-deps.json";

/// BackendClient adapter for the bundle backend's JSON API
///
/// Implements every backend-facing port. Read requests are retried a
/// bounded number of times; state-changing actions are sent exactly once.
/// All requests carry no-cache headers so that a refresh always sees the
/// backend's current state.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    api_url: String,
    bundles_path: String,
    dependencies_path: String,
    max_retries: u32,
}

impl BackendClient {
    /// Creates a client for the API rooted at `api_url`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed
    pub fn new(api_url: &str, timeout: Duration, max_retries: u32) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bundle-catalog/{}", version);

        let mut headers = HeaderMap::new();
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        );
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(EXPIRES, HeaderValue::from_static("0"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            bundles_path: DEFAULT_BUNDLES_PATH.to_string(),
            dependencies_path: DEFAULT_DEPENDENCIES_PATH.to_string(),
            max_retries: max_retries.max(1),
        })
    }

    /// Overrides where the bundle list and the dependency edges live
    ///
    /// Relative paths are resolved against the API url.
    pub fn with_catalog_paths(
        mut self,
        bundles_path: impl Into<String>,
        dependencies_path: impl Into<String>,
    ) -> Self {
        self.bundles_path = bundles_path.into();
        self.dependencies_path = dependencies_path.into();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Absolute url of `path`
    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.api_url, path.trim_start_matches('/'))
        }
    }

    /// Fetches `url` with retry logic
    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            CatalogError::BackendUnavailable {
                url: url.to_string(),
                details: "no attempt was made".to_string(),
            }
            .into()
        }))
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        let unavailable = |details: String| CatalogError::BackendUnavailable {
            url: url.to_string(),
            details,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("backend returned status code {}", status)).into());
        }

        Ok(response
            .text()
            .await
            .map_err(|e| unavailable(e.to_string()))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        let body = self.fetch_with_retry(&url).await?;
        parse_json(&body, path)
    }

    /// Sends a state-changing request once and parses the returned log
    async fn run_action(&self, path: &str) -> Result<Vec<BackendLogEntry>> {
        let url = self.endpoint(path);
        let body = self.fetch_once(&url).await?;
        parse_json(&body, path)
    }
}

fn parse_json<T: DeserializeOwned>(body: &str, source_name: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        CatalogError::SnapshotParseError {
            source_name: source_name.to_string(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Builds `<path>?<key>=<value>&bundles=<json array of ids>`
///
/// Each value is checked before it is percent-encoded into the url.
fn bundle_action_path(path: &str, key: &str, value: &str, bundle_ids: &[String]) -> Result<String> {
    validate_url_component(value, key)?;
    if bundle_ids.is_empty() {
        return Err(CatalogError::Validation {
            message: "at least one bundle id is required".to_string(),
        }
        .into());
    }
    for id in bundle_ids {
        validate_url_component(id, "Bundle id")?;
    }

    let ids = serde_json::to_string(bundle_ids)?;
    Ok(format!(
        "{}?{}={}&bundles={}",
        path,
        key,
        urlencoding::encode(value),
        urlencoding::encode(&ids)
    ))
}

/// Parses the wire form of the edge list, skipping entries that are not pairs
fn edges_from_pairs(pairs: Vec<Vec<String>>) -> Vec<DependencyEdge> {
    pairs
        .iter()
        .filter_map(|pair| DependencyEdge::from_pair(pair))
        .collect()
}

#[async_trait]
impl CatalogSource for BackendClient {
    async fn fetch_bundles(&self) -> Result<Vec<BundleRecord>> {
        self.get_json(&self.bundles_path).await
    }

    async fn fetch_dependency_edges(&self) -> Result<Vec<DependencyEdge>> {
        let pairs: Vec<Vec<String>> = self.get_json(&self.dependencies_path).await?;
        Ok(edges_from_pairs(pairs))
    }
}

#[async_trait]
impl ManagedBundleRepository for BackendClient {
    async fn fetch_managed_bundles(&self) -> Result<Vec<ManagedBundle>> {
        self.get_json("managedBundles").await
    }

    async fn fetch_managed_bundle_info(&self, id: &str) -> Result<ManagedBundleInfo> {
        let ids = [id.to_string()];
        self.fetch_managed_bundle_infos(&ids)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::UnknownBundle { id: id.to_string() }.into())
    }

    async fn fetch_managed_bundle_infos(&self, ids: &[String]) -> Result<Vec<ManagedBundleInfo>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        for id in ids {
            validate_url_component(id, "Bundle id")?;
        }
        let query = urlencoding::encode(&serde_json::to_string(ids)?).into_owned();
        let infos: Vec<ManagedBundleInfo> = self
            .get_json(&format!("managedBundleInfos?bundles={}", query))
            .await?;

        // The backend may ignore the id list and answer with every info
        Ok(ids
            .iter()
            .filter_map(|id| infos.iter().find(|info| info.id() == id).cloned())
            .collect())
    }
}

#[async_trait]
impl WorkflowMetadataRepository for BackendClient {
    async fn fetch_workflow_metadata(&self) -> Result<Vec<WorkflowMetadata>> {
        self.get_json("workflowMetadata").await
    }

    async fn fetch_configured_stages(&self) -> Result<Vec<String>> {
        self.get_json("configuredStages").await
    }

    async fn fetch_configured_targets(&self) -> Result<Vec<TargetDescription>> {
        self.get_json("configuredTargets").await
    }
}

#[async_trait]
impl WorkflowActions for BackendClient {
    async fn mark_for_status(
        &self,
        status: &str,
        bundle_ids: &[String],
    ) -> Result<Vec<BackendLogEntry>> {
        let path = bundle_action_path("markForStatus", "status", status, bundle_ids)?;
        self.run_action(&path).await
    }

    async fn set_target(
        &self,
        target: &str,
        bundle_ids: &[String],
    ) -> Result<Vec<BackendLogEntry>> {
        let path = bundle_action_path("setTarget", "target", target, bundle_ids)?;
        self.run_action(&path).await
    }

    async fn undo_last_change(&self) -> Result<Vec<BackendLogEntry>> {
        self.run_action("undoLastChange").await
    }

    async fn publish_changes(&self) -> Result<Vec<BackendLogEntry>> {
        self.run_action("publishChanges").await
    }
}
