use serde::Deserialize;

/// ComponentRecord - a persisted component row
///
/// Covers every kind of component (project, portfolio, directory, file...).
/// Optional text columns may be stored as empty strings; normalizing those
/// is the projection's job, so they are kept verbatim here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    key: String,
    name: String,
    qualifier: String,
    organization_uuid: String,
    #[serde(default)]
    branch: Option<String>,
    #[serde(default)]
    pull_request: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    is_private: bool,
}

impl ComponentRecord {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        qualifier: impl Into<String>,
        organization_uuid: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            qualifier: qualifier.into(),
            organization_uuid: organization_uuid.into(),
            branch: None,
            pull_request: None,
            path: None,
            description: None,
            language: None,
            is_private: false,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_pull_request(mut self, pull_request: impl Into<String>) -> Self {
        self.pull_request = Some(pull_request.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    pub fn organization_uuid(&self) -> &str {
        &self.organization_uuid
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn pull_request(&self) -> Option<&str> {
        self.pull_request.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}
