use serde::Deserialize;

/// OrganizationRecord - the organization owning a component
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationRecord {
    uuid: String,
    key: String,
}

impl OrganizationRecord {
    pub fn new(uuid: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            key: key.into(),
        }
    }

    /// Internal identifier, matched against `organization_uuid` of components
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Human readable key exposed by the web service
    pub fn key(&self) -> &str {
        &self.key
    }
}
