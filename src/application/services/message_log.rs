use crate::catalog::domain::BackendLogEntry;
use crate::ports::outbound::ProgressReporter;

/// MessageLog keeps the user-facing messages of the last operation
///
/// Every `set_*` call replaces the previous messages wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<BackendLogEntry>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.entries = vec![BackendLogEntry::error(message)];
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.entries = vec![BackendLogEntry::warning(message)];
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.entries = vec![BackendLogEntry::info(message)];
    }

    pub fn set_entries(&mut self, entries: Vec<BackendLogEntry>) {
        self.entries = entries;
    }

    /// Records a failed request as `"<context>: <details>"`
    ///
    /// Only the first line of the error is kept; hint lines are meant for
    /// the terminal, not for a one-line message.
    pub fn set_error_response(&mut self, context: &str, error: &anyhow::Error) {
        let rendered = error.to_string();
        let details = rendered.lines().next().unwrap_or_default();
        self.set_error(format!("{}: {}", context, details));
    }

    /// Appends without replacing, used when one operation yields several messages
    pub fn push(&mut self, entry: BackendLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[BackendLogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(BackendLogEntry::is_error)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Writes the messages through a progress reporter
    ///
    /// Errors and warnings go to `report_error`, everything else to `report`.
    pub fn report_to<P: ProgressReporter + ?Sized>(&self, progress: &P) {
        for entry in &self.entries {
            let line = format!("[{}] {}", entry.level, entry.message);
            if entry.is_error() || entry.is_warning() {
                progress.report_error(&format!("⚠️  {}", line));
            } else {
                progress.report(&line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::CatalogError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingReporter {
        infos: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, message: &str) {
            self.infos.borrow_mut().push(message.to_string());
        }
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    #[test]
    fn test_set_replaces_previous_entries() {
        let mut log = MessageLog::new();
        log.set_entries(vec![
            BackendLogEntry::info("one"),
            BackendLogEntry::info("two"),
        ]);
        log.set_warning("three");

        assert_eq!(log.entries().len(), 1);
        assert!(log.entries()[0].is_warning());
        assert!(!log.has_errors());
    }

    #[test]
    fn test_set_error_response_uses_first_line() {
        let mut log = MessageLog::new();
        let error: anyhow::Error = CatalogError::BackendUnavailable {
            url: "http://localhost/api/bundles.json".to_string(),
            details: "connection refused".to_string(),
        }
        .into();

        log.set_error_response("Bundles could not be loaded", &error);

        assert!(log.has_errors());
        assert_eq!(
            log.entries()[0].message,
            "Bundles could not be loaded: Backend request failed: http://localhost/api/bundles.json"
        );
    }

    #[test]
    fn test_report_to_routes_by_level() {
        let mut log = MessageLog::new();
        log.set_entries(vec![
            BackendLogEntry::info("MARKED"),
            BackendLogEntry::warning("careful"),
            BackendLogEntry::error("failed"),
        ]);

        let reporter = RecordingReporter::default();
        log.report_to(&reporter);

        assert_eq!(*reporter.infos.borrow(), vec!["[INFO] MARKED"]);
        assert_eq!(reporter.errors.borrow().len(), 2);
        assert!(reporter.errors.borrow()[1].contains("[ERROR] failed"));
    }
}
