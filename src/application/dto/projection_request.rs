use crate::component::domain::{
    AnalysisSnapshot, ComponentRecord, OrganizationRecord, ProjectRecord,
};
use serde::Deserialize;

/// ProjectionRequest - the records to project, as loaded from storage
///
/// When `project` is present the component is projected as a project or
/// application; otherwise as a plain component.
///
/// ```json
/// {
///   "organization": { "uuid": "o1", "key": "org-key" },
///   "component": { "key": "proj:1", "name": "Demo", "qualifier": "TRK", "organizationUuid": "o1" },
///   "project": { "key": "proj:1", "qualifier": "TRK", "organizationUuid": "o1", "tags": ["a"] },
///   "analysis": { "createdAt": 1700000000000 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectionRequest {
    pub organization: OrganizationRecord,
    pub component: ComponentRecord,
    #[serde(default)]
    pub project: Option<ProjectRecord>,
    /// Last analysis of the component, if it was ever analyzed
    #[serde(default)]
    pub analysis: Option<AnalysisSnapshot>,
}

impl ProjectionRequest {
    pub fn new(organization: OrganizationRecord, component: ComponentRecord) -> Self {
        Self {
            organization,
            component,
            project: None,
            analysis: None,
        }
    }

    pub fn with_project(mut self, project: ProjectRecord) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_analysis(mut self, analysis: AnalysisSnapshot) -> Self {
        self.analysis = Some(analysis);
        self
    }

    /// Parses a JSON request document
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_minimal() {
        let json = r#"{
            "organization": {"uuid": "o1", "key": "org-key"},
            "component": {"key": "k", "name": "n", "qualifier": "FIL", "organizationUuid": "o1"}
        }"#;
        let request = ProjectionRequest::from_json(json).unwrap();

        assert_eq!(request.organization.key(), "org-key");
        assert_eq!(request.component.key(), "k");
        assert!(request.project.is_none());
        assert!(request.analysis.is_none());
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "organization": {"uuid": "o1", "key": "org-key"},
            "component": {"key": "proj:1", "name": "Demo", "qualifier": "TRK", "organizationUuid": "o1"},
            "project": {"key": "proj:1", "qualifier": "TRK", "organizationUuid": "o1", "tags": ["a", "b"]},
            "analysis": {"createdAt": 1700000000000, "projectVersion": "1.0"}
        }"#;
        let request = ProjectionRequest::from_json(json).unwrap();

        let project = request.project.unwrap();
        assert_eq!(project.tags(), ["a", "b"]);
        assert_eq!(request.analysis.unwrap().project_version(), Some("1.0"));
    }

    #[test]
    fn test_from_json_missing_organization() {
        let json = r#"{
            "component": {"key": "k", "name": "n", "qualifier": "FIL", "organizationUuid": "o1"}
        }"#;
        let error = ProjectionRequest::from_json(json).unwrap_err();
        assert!(error.to_string().contains("organization"));
    }

    #[test]
    fn test_from_json_rejects_unknown_sections() {
        let json = r#"{
            "organization": {"uuid": "o1", "key": "org-key"},
            "component": {"key": "k", "name": "n", "qualifier": "FIL", "organizationUuid": "o1"},
            "snapshot": {}
        }"#;
        assert!(ProjectionRequest::from_json(json).is_err());
    }

    #[test]
    fn test_builder_methods() {
        let request = ProjectionRequest::new(
            OrganizationRecord::new("o1", "org-key"),
            ComponentRecord::new("k", "n", "TRK", "o1"),
        )
        .with_project(ProjectRecord::new("k", "TRK", "o1"));

        assert!(request.project.is_some());
        assert!(request.analysis.is_none());
    }
}
