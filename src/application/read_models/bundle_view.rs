//! Bundle view structs for read model
//!
//! Flattened, output-ready representation of bundle records.

use crate::catalog::domain::{BundleRecord, CatalogSnapshot};
use serde::Serialize;

/// View representation of one bundle record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleView {
    pub id: String,
    /// Distribution from the id, `unknown` for malformed ids
    pub distribution: String,
    /// Bundle number from the id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    pub status: String,
    pub target: String,
    pub subject: String,
    pub creator: String,
    pub ticket: String,
    pub ticket_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parent_tickets: Vec<String>,
}

impl From<&BundleRecord> for BundleView {
    fn from(record: &BundleRecord) -> Self {
        Self {
            id: record.id.clone(),
            distribution: record.distribution(),
            number: record.bundle_id().map(|id| id.num()),
            status: record.status.clone(),
            target: record.target.clone(),
            subject: record.subject.clone(),
            creator: record.creator.clone(),
            ticket: record.ticket.clone(),
            ticket_url: record.ticket_url.clone(),
            parent_tickets: record.parent_tickets().to_vec(),
        }
    }
}

/// Facts about the snapshot a view was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotView {
    /// RFC 3339 time the snapshot was built
    pub fetched_at: String,
    pub bundle_count: usize,
    pub dependencies_available: bool,
}

impl From<&CatalogSnapshot> for SnapshotView {
    fn from(snapshot: &CatalogSnapshot) -> Self {
        Self {
            fetched_at: snapshot.fetched_at().to_rfc3339(),
            bundle_count: snapshot.len(),
            dependencies_available: snapshot.dependencies().is_available(),
        }
    }
}

pub(crate) fn bundle_views<'a, I>(records: I) -> Vec<BundleView>
where
    I: IntoIterator<Item = &'a BundleRecord>,
{
    records.into_iter().map(BundleView::from).collect()
}
