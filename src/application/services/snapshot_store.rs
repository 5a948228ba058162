use crate::catalog::domain::CatalogSnapshot;
use std::sync::Arc;
use tokio::sync::watch;

/// SnapshotStore publishes immutable catalog snapshots
///
/// Readers hold an `Arc<CatalogSnapshot>` for as long as they need it and
/// never observe a half-built snapshot. The last published snapshot wins.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    sender: Arc<watch::Sender<Option<Arc<CatalogSnapshot>>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replaces the current snapshot and notifies subscribers
    pub fn publish(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.sender.send_replace(Some(Arc::clone(&snapshot)));
        snapshot
    }

    /// The last published snapshot, if any
    pub fn current(&self) -> Option<Arc<CatalogSnapshot>> {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<CatalogSnapshot>>> {
        self.sender.subscribe()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
