use crate::application::dto::{ProjectionRequest, ProjectionResponse, ShowComponentRequest};
use crate::shared::Result;

/// ComponentProjectionPort - Inbound port for projecting components
///
/// The application's public API, used by the CLI and by any other adapter
/// that needs the web-service view of a component.
pub trait ComponentProjectionPort {
    /// Loads the records named by `request` and projects them
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request document cannot be read or parsed
    /// - The records belong to different organizations
    fn show_component(&self, request: ShowComponentRequest) -> Result<ProjectionResponse>;

    /// Projects records that are already loaded
    ///
    /// # Errors
    /// Returns an error if the records belong to different organizations
    fn project(&self, records: &ProjectionRequest) -> Result<ProjectionResponse>;
}
