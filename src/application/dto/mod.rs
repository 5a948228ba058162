/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod search_request;
mod workflow_action_request;
mod workflow_board_request;

pub use output_format::OutputFormat;
pub use search_request::SearchRequest;
pub use workflow_action_request::WorkflowActionRequest;
pub use workflow_board_request::WorkflowBoardRequest;
