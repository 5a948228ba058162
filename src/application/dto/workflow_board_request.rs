use crate::catalog::services::LaneSelection;

/// WorkflowBoardRequest - Internal request DTO for the workflow board use case
///
/// Empty distribution and target lists mean "all available", which is what
/// the board shows on first load.
#[derive(Debug, Clone)]
pub struct WorkflowBoardRequest {
    pub lanes: LaneSelection,
    pub distributions: Vec<String>,
    pub targets: Vec<String>,
    /// Whether to fetch subject and creator of the shown bundles
    pub load_details: bool,
}

impl Default for WorkflowBoardRequest {
    fn default() -> Self {
        Self {
            lanes: LaneSelection::all(),
            distributions: Vec::new(),
            targets: Vec::new(),
            load_details: true,
        }
    }
}

impl WorkflowBoardRequest {
    pub fn new(lanes: LaneSelection, distributions: Vec<String>, targets: Vec<String>) -> Self {
        Self {
            lanes,
            distributions,
            targets,
            load_details: true,
        }
    }

    pub fn without_details(mut self) -> Self {
        self.load_details = false;
        self
    }
}
