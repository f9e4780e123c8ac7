use crate::application::read_models::WsComponent;

/// Which projection produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Project or application, projected together with its project row
    ProjectOrApp,
    /// Any other component
    Component,
}

/// ProjectionResponse - Internal response DTO of the show-component use case
///
/// Formatters turn it into the final output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionResponse {
    pub component: WsComponent,
    pub kind: ProjectionKind,
}

impl ProjectionResponse {
    pub fn new(component: WsComponent, kind: ProjectionKind) -> Self {
        Self { component, kind }
    }
}
