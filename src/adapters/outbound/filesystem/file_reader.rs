use crate::adapters::outbound::network::{DEFAULT_BUNDLES_PATH, DEFAULT_DEPENDENCIES_PATH};
use crate::catalog::domain::{BundleRecord, DependencyEdge};
use crate::ports::outbound::CatalogSource;
use crate::shared::error::CatalogError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// SnapshotDirectoryReader adapter reading an exported catalog from disk
///
/// The directory holds the same `bundles.json` and `bundle-deps.json`
/// documents the backend serves, which makes offline queries and
/// reproducible tests possible.
pub struct SnapshotDirectoryReader {
    directory: PathBuf,
    bundles_file: String,
    dependencies_file: String,
}

impl SnapshotDirectoryReader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            bundles_file: DEFAULT_BUNDLES_PATH.to_string(),
            dependencies_file: DEFAULT_DEPENDENCIES_PATH.to_string(),
        }
    }

    pub fn with_file_names(
        mut self,
        bundles_file: impl Into<String>,
        dependencies_file: impl Into<String>,
    ) -> Self {
        self.bundles_file = bundles_file.into();
        self.dependencies_file = dependencies_file.into();
        self
    }

    /// Reads and parses one JSON document of the directory
    fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.directory.join(file_name);
        let content = Self::safe_read_file(&path, file_name)?;

        serde_json::from_str(&content).map_err(|e| {
            CatalogError::SnapshotParseError {
                source_name: path.display().to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Reads a file after rejecting symlinks, non-files and oversized files
    fn safe_read_file(path: &Path, file_name: &str) -> Result<String> {
        let read_error = |details: String| CatalogError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        validate_regular_file(path, file_name).map_err(|e| read_error(e.to_string()))?;
        Ok(fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?)
    }
}

#[async_trait]
impl CatalogSource for SnapshotDirectoryReader {
    async fn fetch_bundles(&self) -> Result<Vec<BundleRecord>> {
        self.read_json(&self.bundles_file)
    }

    async fn fetch_dependency_edges(&self) -> Result<Vec<DependencyEdge>> {
        let pairs: Vec<Vec<String>> = self.read_json(&self.dependencies_file)?;
        Ok(pairs
            .iter()
            .filter_map(|pair| DependencyEdge::from_pair(pair))
            .collect())
    }
}
