use serde::{Deserialize, Serialize};

pub const LEVEL_ERROR: &str = "ERROR";
pub const LEVEL_WARNING: &str = "WARNING";
pub const LEVEL_INFO: &str = "INFO";

/// Log line produced by the backend for a workflow action, also used for
/// the client's own user-facing messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendLogEntry {
    #[serde(default)]
    pub logger: Option<String>,
    pub level: String,
    pub message: String,
}

impl BackendLogEntry {
    pub fn new(level: &str, message: impl Into<String>) -> Self {
        Self {
            logger: None,
            level: level.to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LEVEL_ERROR, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(LEVEL_WARNING, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LEVEL_INFO, message)
    }

    pub fn is_error(&self) -> bool {
        self.level.eq_ignore_ascii_case(LEVEL_ERROR)
    }

    pub fn is_warning(&self) -> bool {
        self.level.eq_ignore_ascii_case(LEVEL_WARNING) || self.level.eq_ignore_ascii_case("WARN")
    }
}
