use super::WorkflowMetadata;
use serde::{Deserialize, Serialize};

/// A bundle under workflow management (`managedBundles` endpoint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedBundle {
    pub id: String,
    #[serde(default)]
    pub distribution: String,
    pub status: WorkflowMetadata,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub ticket: String,
    #[serde(default)]
    pub ticket_url: String,
}

/// The slower-to-resolve details of a managed bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedBundleInfo {
    pub managed_bundle: ManagedBundle,
    #[serde(default)]
    pub based_on: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub creator: String,
}

impl ManagedBundleInfo {
    pub fn id(&self) -> &str {
        &self.managed_bundle.id
    }
}

/// Load state of a managed bundle's details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "info", rename_all = "lowercase")]
pub enum InfoState {
    Loading,
    Loaded(ManagedBundleInfo),
}

impl InfoState {
    pub fn info(&self) -> Option<&ManagedBundleInfo> {
        match self {
            InfoState::Loaded(info) => Some(info),
            InfoState::Loading => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, InfoState::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANAGED_BUNDLE_JSON: &str = r#"{
        "id": "bundle:bionic/12",
        "distribution": "bionic",
        "status": {"ord": 6, "name": "TEST_CUST", "stage": "test", "candidates": "TESTED_AND_RELEASED"},
        "target": "plus",
        "ticket": "4711",
        "ticketUrl": "https://trac.example/ticket/4711"
    }"#;

    #[test]
    fn test_deserialize_managed_bundle() {
        let bundle: ManagedBundle = serde_json::from_str(MANAGED_BUNDLE_JSON).unwrap();
        assert_eq!(bundle.id, "bundle:bionic/12");
        assert_eq!(bundle.status.name, "TEST_CUST");
        assert_eq!(bundle.ticket_url, "https://trac.example/ticket/4711");
    }

    #[test]
    fn test_deserialize_managed_bundle_info() {
        let json = format!(
            r#"{{"managedBundle": {}, "basedOn": null, "subject": "Firefox", "creator": "jdoe"}}"#,
            MANAGED_BUNDLE_JSON
        );
        let info: ManagedBundleInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.id(), "bundle:bionic/12");
        assert!(info.based_on.is_none());
        assert_eq!(info.subject, "Firefox");
    }

    #[test]
    fn test_info_state() {
        assert!(!InfoState::Loading.is_loaded());
        assert!(InfoState::Loading.info().is_none());
    }
}
