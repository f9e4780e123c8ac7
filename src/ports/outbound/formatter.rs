use crate::application::dto::ProjectionResponse;
use crate::shared::Result;

/// ComponentFormatter port for rendering a projected component
pub trait ComponentFormatter {
    /// Renders the response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ProjectionResponse) -> Result<String>;
}
