use crate::application::services::{MessageLog, SnapshotStore};
use crate::catalog::domain::CatalogSnapshot;
use crate::catalog::services::SnapshotBuilder;
use crate::ports::outbound::{CatalogSource, ProgressReporter};
use crate::shared::Result;
use std::sync::Arc;

/// Warning shown when the optional dependency document cannot be read
pub const DEPENDENCIES_UNAVAILABLE_MESSAGE: &str =
    "Bundle-Dependencies could not be shown at the moment! (bundle-deps.json missing)";

const BUNDLES_FAILED_CONTEXT: &str = "Bundles could not be loaded";

/// Result of one refresh
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// The snapshot queries should run against
    pub snapshot: Arc<CatalogSnapshot>,
    pub messages: MessageLog,
    /// True when the fetch failed and `snapshot` is the last good one
    pub stale: bool,
}

/// RefreshCatalogUseCase - fetches the catalog and publishes a new snapshot
///
/// Bundles and dependency edges are fetched concurrently. Missing edges
/// degrade to `Unavailable` with a warning. Failing bundles keep the last
/// published snapshot, or fail the refresh when there is none.
pub struct RefreshCatalogUseCase<CS, PR> {
    source: CS,
    store: SnapshotStore,
    progress_reporter: PR,
}

impl<CS, PR> RefreshCatalogUseCase<CS, PR>
where
    CS: CatalogSource,
    PR: ProgressReporter,
{
    pub fn new(source: CS, store: SnapshotStore, progress_reporter: PR) -> Self {
        Self {
            source,
            store,
            progress_reporter,
        }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub async fn execute(&self) -> Result<RefreshOutcome> {
        self.progress_reporter.report("📖 Loading bundle catalog...");

        let (bundles, edges) = futures::join!(
            self.source.fetch_bundles(),
            self.source.fetch_dependency_edges()
        );

        let mut messages = MessageLog::new();

        let bundles = match bundles {
            Ok(bundles) => bundles,
            Err(e) => {
                messages.set_error_response(BUNDLES_FAILED_CONTEXT, &e);
                messages.report_to(&self.progress_reporter);
                return match self.store.current() {
                    Some(snapshot) => Ok(RefreshOutcome {
                        snapshot,
                        messages,
                        stale: true,
                    }),
                    None => Err(e),
                };
            }
        };

        let edges = match edges {
            Ok(edges) => Some(edges),
            Err(_) => {
                messages.set_warning(DEPENDENCIES_UNAVAILABLE_MESSAGE);
                None
            }
        };

        let snapshot = self.store.publish(SnapshotBuilder::build(bundles, edges));
        messages.report_to(&self.progress_reporter);
        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} bundle(s)",
            snapshot.len()
        ));

        Ok(RefreshOutcome {
            snapshot,
            messages,
            stale: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{BundleRecord, DependencyEdge};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    struct MockSource {
        bundles: Vec<BundleRecord>,
        edges: Option<Vec<DependencyEdge>>,
        fail_bundles: AtomicBool,
    }

    impl MockSource {
        fn new(ids: &[&str], edges: Option<Vec<DependencyEdge>>) -> Self {
            Self {
                bundles: ids.iter().map(|id| BundleRecord::new(*id)).collect(),
                edges,
                fail_bundles: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl CatalogSource for MockSource {
        async fn fetch_bundles(&self) -> Result<Vec<BundleRecord>> {
            if self.fail_bundles.load(Ordering::SeqCst) {
                anyhow::bail!("connection refused");
            }
            Ok(self.bundles.clone())
        }

        async fn fetch_dependency_edges(&self) -> Result<Vec<DependencyEdge>> {
            self.edges
                .clone()
                .ok_or_else(|| anyhow::anyhow!("404 bundle-deps.json"))
        }
    }

    #[derive(Default)]
    struct MockProgressReporter {
        errors: Mutex<Vec<String>>,
    }

    impl ProgressReporter for MockProgressReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    #[tokio::test]
    async fn test_refresh_publishes_snapshot() {
        let source = MockSource::new(
            &["bundle:foo/1", "bundle:foo/2"],
            Some(vec![DependencyEdge::new("bundle:foo/2", "bundle:foo/1")]),
        );
        let store = SnapshotStore::new();
        let use_case =
            RefreshCatalogUseCase::new(source, store.clone(), MockProgressReporter::default());

        let outcome = use_case.execute().await.unwrap();

        assert!(!outcome.stale);
        assert!(outcome.messages.is_empty());
        assert!(outcome.snapshot.dependencies().is_available());
        assert_eq!(store.current().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_edges_is_a_warning() {
        let source = MockSource::new(&["bundle:foo/1"], None);
        let use_case = RefreshCatalogUseCase::new(
            source,
            SnapshotStore::new(),
            MockProgressReporter::default(),
        );

        let outcome = use_case.execute().await.unwrap();

        assert!(!outcome.snapshot.dependencies().is_available());
        assert_eq!(outcome.messages.entries().len(), 1);
        assert!(outcome.messages.entries()[0].is_warning());
        assert_eq!(
            outcome.messages.entries()[0].message,
            DEPENDENCIES_UNAVAILABLE_MESSAGE
        );
        assert_eq!(use_case.progress_reporter.errors.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let source = MockSource::new(&["bundle:foo/1"], None);
        let use_case = RefreshCatalogUseCase::new(
            source,
            SnapshotStore::new(),
            MockProgressReporter::default(),
        );
        let first = use_case.execute().await.unwrap();

        use_case.source.fail_bundles.store(true, Ordering::SeqCst);
        let second = use_case.execute().await.unwrap();

        assert!(second.stale);
        assert!(second.messages.has_errors());
        assert!(second.messages.entries()[0]
            .message
            .starts_with("Bundles could not be loaded: connection refused"));
        assert!(Arc::ptr_eq(&first.snapshot, &second.snapshot));
        assert!(Arc::ptr_eq(
            &first.snapshot,
            &use_case.store().current().unwrap()
        ));
    }

    #[tokio::test]
    async fn test_failed_first_refresh_is_an_error() {
        let source = MockSource::new(&[], None);
        source.fail_bundles.store(true, Ordering::SeqCst);
        let use_case = RefreshCatalogUseCase::new(
            source,
            SnapshotStore::new(),
            MockProgressReporter::default(),
        );

        assert!(use_case.execute().await.is_err());
        assert!(use_case.store().current().is_none());
    }
}
