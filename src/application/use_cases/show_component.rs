use crate::application::dto::{
    ProjectionKind, ProjectionRequest, ProjectionResponse, ShowComponentRequest,
};
use crate::application::read_models::{component_to_ws_component, project_or_app_to_ws_component};
use crate::component::domain::qualifier;
use crate::ports::inbound::ComponentProjectionPort;
use crate::ports::outbound::{ProgressReporter, RequestReader};
use crate::shared::error::AppError;
use crate::shared::Result;
use tracing::debug;

/// ShowComponentUseCase - loads component records and projects them
///
/// # Type Parameters
/// * `RR` - RequestReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ShowComponentUseCase<RR, PR> {
    request_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> ShowComponentUseCase<RR, PR>
where
    RR: RequestReader,
    PR: ProgressReporter,
{
    /// Creates a new ShowComponentUseCase with injected dependencies
    pub fn new(request_reader: RR, progress_reporter: PR) -> Self {
        Self {
            request_reader,
            progress_reporter,
        }
    }

    /// Executes the use case: read, parse, project
    pub fn execute(&self, request: ShowComponentRequest) -> Result<ProjectionResponse> {
        let records = self.load_records(&request)?;
        self.project_records(&records)
    }

    fn load_records(&self, request: &ShowComponentRequest) -> Result<ProjectionRequest> {
        self.progress_reporter.report(&format!(
            "📖 Loading component records from: {}",
            request.request_path.display()
        ));

        let content = self.request_reader.read_request(&request.request_path)?;
        debug!(bytes = content.len(), path = %request.request_path.display(), "read request document");

        ProjectionRequest::from_json(&content).map_err(|e| {
            AppError::RequestParseError {
                path: request.request_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Picks the projection: project rows go through the project/app
    /// projection, everything else through the plain component one.
    fn project_records(&self, records: &ProjectionRequest) -> Result<ProjectionResponse> {
        let (builder, kind) = match records.project.as_ref() {
            Some(project) => (
                project_or_app_to_ws_component(
                    project,
                    &records.component,
                    &records.organization,
                    records.analysis.as_ref(),
                )?,
                ProjectionKind::ProjectOrApp,
            ),
            None => (
                component_to_ws_component(
                    &records.component,
                    &records.organization,
                    records.analysis.as_ref(),
                )?,
                ProjectionKind::Component,
            ),
        };

        let component = builder.build();
        debug!(
            key = %component.key,
            qualifier = %component.qualifier,
            ?kind,
            has_visibility = component.visibility.is_some(),
            has_tags = component.tags.is_some(),
            "projected component"
        );

        self.progress_reporter.report(&format!(
            "✅ Projected {} '{}'",
            qualifier::display_name(&component.qualifier).to_lowercase(),
            component.key
        ));

        Ok(ProjectionResponse::new(component, kind))
    }
}

impl<RR, PR> ComponentProjectionPort for ShowComponentUseCase<RR, PR>
where
    RR: RequestReader,
    PR: ProgressReporter,
{
    fn show_component(&self, request: ShowComponentRequest) -> Result<ProjectionResponse> {
        self.execute(request)
    }

    fn project(&self, records: &ProjectionRequest) -> Result<ProjectionResponse> {
        self.project_records(records)
    }
}
