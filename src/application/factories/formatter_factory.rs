use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CatalogFormatter;

/// Factory for creating catalog formatters
///
/// Keeps the choice of formatter adapter out of the CLI and the use cases.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bundle_catalog::application::dto::OutputFormat;
    /// use bundle_catalog::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn CatalogFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bundle_catalog::application::dto::OutputFormat;
    /// use bundle_catalog::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::CatalogReadModelBuilder;
    use crate::catalog::domain::BackendLogEntry;

    #[test]
    fn test_created_formatters_render_their_format() {
        let model =
            CatalogReadModelBuilder::action_log("undo", vec![BackendLogEntry::info("reverted")]);

        let json = FormatterFactory::create(OutputFormat::Json)
            .format(&model)
            .unwrap();
        assert!(json.trim_start().starts_with('{'));

        let markdown = FormatterFactory::create(OutputFormat::Markdown)
            .format(&model)
            .unwrap();
        assert!(markdown.starts_with('#'));
    }

    #[test]
    fn test_progress_message_markdown() {
        let message = FormatterFactory::progress_message(OutputFormat::Markdown);
        assert_eq!(message, "📝 Generating Markdown output...");
    }
}
