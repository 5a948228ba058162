//! Stateful application services shared by the use cases

pub mod managed_bundle_directory;
pub mod message_log;
pub mod snapshot_store;

pub use managed_bundle_directory::{
    InfoLoadSummary, ManagedBundleDirectory, DEFAULT_INFO_CHUNK_SIZE, MAX_CHUNKS_IN_FLIGHT,
};
pub use message_log::MessageLog;
pub use snapshot_store::SnapshotStore;
