use crate::catalog::domain::{InfoState, ManagedBundle, ManagedBundleInfo};
use crate::ports::outbound::{ManagedBundleRepository, ProgressReporter};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};

/// Ids per details request
pub const DEFAULT_INFO_CHUNK_SIZE: usize = 10;

/// Details requests running at the same time
pub const MAX_CHUNKS_IN_FLIGHT: usize = 4;

/// Outcome of a `load_unknown_infos` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoLoadSummary {
    /// Ids that had no details before the run
    pub requested: usize,
    pub loaded: usize,
    pub failed_chunks: usize,
}

/// ManagedBundleDirectory holds the managed bundles and their lazily
/// loaded details
///
/// The bundle list is replaced on every refresh. Details survive a refresh
/// for ids that are still managed and are dropped for ids that vanished.
pub struct ManagedBundleDirectory {
    bundles: Vec<ManagedBundle>,
    infos: HashMap<String, ManagedBundleInfo>,
    chunk_size: usize,
}

impl ManagedBundleDirectory {
    pub fn new() -> Self {
        Self {
            bundles: Vec::new(),
            infos: HashMap::new(),
            chunk_size: DEFAULT_INFO_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Fetches the managed bundle list and replaces the current one
    pub async fn refresh<R>(&mut self, repository: &R) -> Result<()>
    where
        R: ManagedBundleRepository + ?Sized,
    {
        let bundles = repository.fetch_managed_bundles().await?;
        self.replace_bundles(bundles);
        Ok(())
    }

    pub fn replace_bundles(&mut self, bundles: Vec<ManagedBundle>) {
        let ids: HashSet<&str> = bundles.iter().map(|b| b.id.as_str()).collect();
        self.infos.retain(|id, _| ids.contains(id.as_str()));
        self.bundles = bundles;
    }

    pub fn bundles(&self) -> &[ManagedBundle] {
        &self.bundles
    }

    pub fn info(&self, id: &str) -> Option<&ManagedBundleInfo> {
        self.infos.get(id)
    }

    pub fn info_state(&self, id: &str) -> InfoState {
        match self.infos.get(id) {
            Some(info) => InfoState::Loaded(info.clone()),
            None => InfoState::Loading,
        }
    }

    /// Ids of `ids` without details, deduplicated, in the given order
    pub fn unknown_ids<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| !self.infos.contains_key(*id) && seen.insert(*id))
            .map(str::to_string)
            .collect()
    }

    /// Loads the details of every id in `ids` that has none yet
    ///
    /// Ids are requested in chunks of `chunk_size`, with at most
    /// `MAX_CHUNKS_IN_FLIGHT` requests outstanding. A failed chunk is
    /// reported and leaves its ids in the `Loading` state.
    pub async fn load_unknown_infos<R, P>(
        &mut self,
        repository: &R,
        ids: &[String],
        progress: &P,
    ) -> InfoLoadSummary
    where
        R: ManagedBundleRepository + ?Sized,
        P: ProgressReporter + ?Sized,
    {
        let missing = self.unknown_ids(ids.iter().map(String::as_str));
        let mut summary = InfoLoadSummary {
            requested: missing.len(),
            ..InfoLoadSummary::default()
        };
        if missing.is_empty() {
            return summary;
        }

        let chunks: Vec<Vec<String>> = missing
            .chunks(self.chunk_size)
            .map(<[String]>::to_vec)
            .collect();

        let mut responses = stream::iter(chunks)
            .map(|chunk| async move {
                let result = repository.fetch_managed_bundle_infos(&chunk).await;
                (chunk, result)
            })
            .buffer_unordered(MAX_CHUNKS_IN_FLIGHT);

        let mut done = 0;
        while let Some((chunk, result)) = responses.next().await {
            done += chunk.len();
            match result {
                Ok(infos) => {
                    for info in infos {
                        summary.loaded += 1;
                        self.infos.insert(info.id().to_string(), info);
                    }
                }
                Err(e) => {
                    summary.failed_chunks += 1;
                    let rendered = e.to_string();
                    progress.report_error(&format!(
                        "⚠️  Warning: Failed to load details of {} bundle(s): {}",
                        chunk.len(),
                        rendered.lines().next().unwrap_or_default()
                    ));
                }
            }
            progress.report_progress(done, summary.requested, Some("bundle details"));
        }

        summary
    }
}

impl Default for ManagedBundleDirectory {
    fn default() -> Self {
        Self::new()
    }
}
