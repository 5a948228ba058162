use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between "nothing matched"
/// and real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The query matched no bundles and `--fail-on-empty` was given
    NoMatches = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (backend unreachable, unreadable snapshot, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoMatches => write!(f, "No Matches (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the bundle catalog.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-facing hints next to the failure they explain.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Backend request failed: {url}\nDetails: {details}\n\n💡 Hint: Check --api-url and that the bundle backend is running")]
    BackendUnavailable { url: String, details: String },

    #[error("Failed to parse {source_name}\nDetails: {details}\n\n💡 Hint: The backend answered with data that is not in the expected JSON shape")]
    SnapshotParseError { source_name: String, details: String },

    #[error("Unknown bundle: {id}\n\n💡 Hint: Bundle ids look like bundle:<dist>/<num>; run `search` to list known bundles")]
    UnknownBundle { id: String },

    #[error("Unknown workflow status: {name}\n\n💡 Hint: Known statuses are: {known}")]
    UnknownStatus { name: String, known: String },

    #[error("Invalid configuration: {details}\n\n💡 Hint: {hint}")]
    InvalidConfig { details: String, hint: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for request builders and action arguments
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::NoMatches.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::NoMatches), "No Matches (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_backend_unavailable_display() {
        let error = CatalogError::BackendUnavailable {
            url: "http://localhost/api/managedBundles".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Backend request failed"));
        assert!(display.contains("http://localhost/api/managedBundles"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_snapshot_parse_error_display() {
        let error = CatalogError::SnapshotParseError {
            source_name: "bundles.json".to_string(),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse bundles.json"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_unknown_bundle_display() {
        let error = CatalogError::UnknownBundle {
            id: "bundle:foo/7".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unknown bundle: bundle:foo/7"));
        assert!(display.contains("bundle:<dist>/<num>"));
    }

    #[test]
    fn test_unknown_status_display() {
        let error = CatalogError::UnknownStatus {
            name: "SHIPPED".to_string(),
            known: "NEW, PRODUCTION".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unknown workflow status: SHIPPED"));
        assert!(display.contains("NEW, PRODUCTION"));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = CatalogError::FileReadError {
            path: PathBuf::from("/test/bundles.json"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/bundles.json"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = CatalogError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_validation_display() {
        let error = CatalogError::Validation {
            message: "no bundles given".to_string(),
        };
        assert_eq!(format!("{}", error), "Validation error: no bundles given");
    }
}
