/// Network adapters for the bundle backend
mod backend_client;
mod caching_info_repository;

pub use backend_client::{BackendClient, DEFAULT_BUNDLES_PATH, DEFAULT_DEPENDENCIES_PATH};
pub use caching_info_repository::CachingManagedBundleRepository;
