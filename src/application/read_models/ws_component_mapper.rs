//! Projection of persisted component records into [`WsComponent`]s
//!
//! Stateless free functions: no I/O, no logging, inputs are only borrowed.
//! Each call returns a fresh builder so callers can still adjust fields
//! before building the final view.

use super::ws_component::WsComponentBuilder;
use crate::component::domain::date_format::format_date_time;
use crate::component::domain::{
    AnalysisSnapshot, ComponentRecord, OrganizationRecord, ProjectRecord, Visibility,
};
use crate::component::policies::VisibilityPolicy;
use crate::shared::error::ProjectionError;

/// Projects a project or application
///
/// Key, qualifier and tags come from the project row. Name, description,
/// language and visibility must come from its component row, even though
/// the project row carries a name and description of its own.
///
/// # Errors
/// [`ProjectionError::OrganizationMismatch`] when the project does not belong
/// to `organization`.
pub fn project_or_app_to_ws_component(
    project: &ProjectRecord,
    component: &ComponentRecord,
    organization: &OrganizationRecord,
    last_analysis: Option<&AnalysisSnapshot>,
) -> Result<WsComponentBuilder, ProjectionError> {
    check_organization(project.organization_uuid(), organization)?;

    let mut ws_component = WsComponentBuilder::new(
        organization.key(),
        project.key(),
        component.name(),
        project.qualifier(),
    )
    .description_if_present(component.description())
    .language_if_present(component.language());

    ws_component = with_last_analysis(ws_component, last_analysis);

    if VisibilityPolicy::supports_visibility(project.qualifier()) {
        ws_component =
            ws_component.visibility(Visibility::from_is_private(component.is_private()));
        if VisibilityPolicy::supports_tags(project.qualifier()) {
            ws_component = ws_component.add_all_tags(project.tags().iter().cloned());
        }
    }

    Ok(ws_component)
}

/// Projects any component (file, directory, portfolio, project...)
///
/// Never sets tags, they are only known on project rows.
///
/// # Errors
/// [`ProjectionError::OrganizationMismatch`] when the component does not
/// belong to `organization`.
pub fn component_to_ws_component(
    component: &ComponentRecord,
    organization: &OrganizationRecord,
    last_analysis: Option<&AnalysisSnapshot>,
) -> Result<WsComponentBuilder, ProjectionError> {
    check_organization(component.organization_uuid(), organization)?;
    Ok(component_to_ws_component_with_org_key(
        component,
        organization.key(),
        last_analysis,
    ))
}

/// Same as [`component_to_ws_component`] for callers that only hold the
/// organization key. No ownership check can be made here.
pub fn component_to_ws_component_with_org_key(
    component: &ComponentRecord,
    organization_key: &str,
    last_analysis: Option<&AnalysisSnapshot>,
) -> WsComponentBuilder {
    let mut ws_component = WsComponentBuilder::new(
        organization_key,
        component.key(),
        component.name(),
        component.qualifier(),
    )
    .branch_if_present(component.branch())
    .pull_request_if_present(component.pull_request())
    .path_if_present(component.path())
    .description_if_present(component.description())
    .language_if_present(component.language());

    ws_component = with_last_analysis(ws_component, last_analysis);

    if VisibilityPolicy::supports_visibility(component.qualifier()) {
        ws_component =
            ws_component.visibility(Visibility::from_is_private(component.is_private()));
    }

    ws_component
}

fn check_organization(
    component_organization: &str,
    organization: &OrganizationRecord,
) -> Result<(), ProjectionError> {
    if component_organization != organization.uuid() {
        return Err(ProjectionError::OrganizationMismatch {
            component_organization: component_organization.to_string(),
            organization: organization.uuid().to_string(),
        });
    }
    Ok(())
}

fn with_last_analysis(
    mut ws_component: WsComponentBuilder,
    last_analysis: Option<&AnalysisSnapshot>,
) -> WsComponentBuilder {
    if let Some(analysis) = last_analysis {
        ws_component = ws_component.analysis_date(format_date_time(analysis.created_at()));
        if let Some(period_date) = analysis.period_date() {
            ws_component = ws_component.leak_period_date(format_date_time(period_date));
        }
        if let Some(version) = analysis.project_version() {
            ws_component = ws_component.version(version);
        }
    }
    ws_component
}
