/// Crate-wide Result with anyhow::Error, so adapters can attach context
/// with `.context()` while domain errors stay typed as `CatalogError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
