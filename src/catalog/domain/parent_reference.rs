use super::BundleRecord;
use serde::Serialize;

/// One row of a bundle's "based on" ancestry
///
/// `bundles` lists every bundle of the snapshot that declares `parent`
/// among its parent tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentReference {
    pub parent: String,
    pub is_direct: bool,
    pub bundles: Vec<BundleRecord>,
}

impl ParentReference {
    pub fn direct(parent: impl Into<String>, bundles: Vec<BundleRecord>) -> Self {
        Self {
            parent: parent.into(),
            is_direct: true,
            bundles,
        }
    }

    pub fn indirect(parent: impl Into<String>, bundles: Vec<BundleRecord>) -> Self {
        Self {
            parent: parent.into(),
            is_direct: false,
            bundles,
        }
    }

    pub fn bundle_ids(&self) -> Vec<&str> {
        self.bundles.iter().map(|b| b.id.as_str()).collect()
    }
}
