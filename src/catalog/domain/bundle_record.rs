use super::BundleId;
use serde::{Deserialize, Serialize};

/// One entry of the bundle list endpoint (`bundles.json`)
///
/// Records are immutable once fetched; a refresh replaces the whole list.
/// Fields the backend leaves out deserialize to empty strings so that
/// search and faceting never have to deal with missing values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRecord {
    pub id: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub ticket: String,
    #[serde(default)]
    pub ticket_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub based_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_tickets: Option<Vec<String>>,
}

impl BundleRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: String::new(),
            status: String::new(),
            subject: String::new(),
            creator: String::new(),
            ticket: String::new(),
            ticket_url: String::new(),
            based_on: None,
            parent_tickets: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn with_ticket(mut self, ticket: impl Into<String>) -> Self {
        self.ticket = ticket.into();
        self
    }

    pub fn with_parent_tickets<I, S>(mut self, tickets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_tickets = Some(tickets.into_iter().map(Into::into).collect());
        self
    }

    pub fn bundle_id(&self) -> Option<BundleId> {
        BundleId::parse(&self.id)
    }

    /// Distribution derived from the id, `unknown` for malformed ids
    pub fn distribution(&self) -> String {
        BundleId::dist_or_unknown(&self.id)
    }

    pub fn parent_tickets(&self) -> &[String] {
        self.parent_tickets.as_deref().unwrap_or(&[])
    }
}
