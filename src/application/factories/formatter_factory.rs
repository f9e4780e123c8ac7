use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ComponentFormatter;

/// Factory for creating component formatters
///
/// Lives in the application layer: it maps an application-level choice
/// (the output format) onto infrastructure adapters.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for `format`
    ///
    /// # Examples
    /// ```
    /// use component_ws::application::dto::OutputFormat;
    /// use component_ws::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ComponentFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress message shown while formatting
    ///
    /// # Examples
    /// ```
    /// use component_ws::application::dto::OutputFormat;
    /// use component_ws::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Markdown);
    /// assert_eq!(message, "📝 Generating Markdown output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating web-service JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
        }
    }
}
