/// Use cases module containing application business logic orchestration
mod query_catalog;
mod refresh_catalog;
mod workflow_action;
mod workflow_board;

pub use query_catalog::QueryCatalogUseCase;
pub use refresh_catalog::{RefreshCatalogUseCase, RefreshOutcome, DEPENDENCIES_UNAVAILABLE_MESSAGE};
pub use workflow_action::{ActionOutcome, WorkflowActionUseCase};
pub use workflow_board::WorkflowBoardUseCase;
