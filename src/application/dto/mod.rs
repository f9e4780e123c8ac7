/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod projection_request;
mod projection_response;
mod show_component_request;

pub use output_format::OutputFormat;
pub use projection_request::ProjectionRequest;
pub use projection_response::{ProjectionKind, ProjectionResponse};
pub use show_component_request::ShowComponentRequest;
