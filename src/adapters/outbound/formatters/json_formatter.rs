use crate::application::dto::ProjectionResponse;
use crate::application::read_models::WsComponent;
use crate::ports::outbound::ComponentFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Envelope of the web-service "show component" response
#[derive(Debug, Serialize)]
struct ShowResponse<'a> {
    component: &'a WsComponent,
}

/// JsonFormatter adapter producing the web-service JSON response
///
/// Absent fields are omitted, never rendered as `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFormatter for JsonFormatter {
    fn format(&self, response: &ProjectionResponse) -> Result<String> {
        let envelope = ShowResponse {
            component: &response.component,
        };
        let mut json = serde_json::to_string_pretty(&envelope)?;
        json.push('\n');
        Ok(json)
    }
}
