use std::fmt;

/// WorkflowActionRequest - a change to submit to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowActionRequest {
    /// Moves bundles to another workflow status
    MarkForStatus { status: String, bundles: Vec<String> },
    /// Assigns bundles to another target
    SetTarget { target: String, bundles: Vec<String> },
    UndoLastChange,
    PublishChanges,
}

impl WorkflowActionRequest {
    /// Bundles the action applies to; empty for undo and publish
    pub fn bundles(&self) -> &[String] {
        match self {
            WorkflowActionRequest::MarkForStatus { bundles, .. }
            | WorkflowActionRequest::SetTarget { bundles, .. } => bundles,
            WorkflowActionRequest::UndoLastChange | WorkflowActionRequest::PublishChanges => &[],
        }
    }
}

impl fmt::Display for WorkflowActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowActionRequest::MarkForStatus { status, bundles } => {
                write!(f, "mark {} bundle(s) for {}", bundles.len(), status)
            }
            WorkflowActionRequest::SetTarget { target, bundles } => {
                write!(f, "set target of {} bundle(s) to {}", bundles.len(), target)
            }
            WorkflowActionRequest::UndoLastChange => write!(f, "undo last change"),
            WorkflowActionRequest::PublishChanges => write!(f, "publish changes"),
        }
    }
}
