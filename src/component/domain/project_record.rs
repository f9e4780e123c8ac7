use serde::Deserialize;

/// ProjectRecord - a persisted project or application row
///
/// Name and description are loaded with the row but are not what the
/// web service exposes; the component row's values are used instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    key: String,
    qualifier: String,
    organization_uuid: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl ProjectRecord {
    pub fn new(
        key: impl Into<String>,
        qualifier: impl Into<String>,
        organization_uuid: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            qualifier: qualifier.into(),
            organization_uuid: organization_uuid.into(),
            name: None,
            description: None,
            tags: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    pub fn organization_uuid(&self) -> &str {
        &self.organization_uuid
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Tags in stored order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
