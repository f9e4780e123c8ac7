//! Web-service component view
//!
//! The outbound representation of a component. Every optional field is
//! omitted from the wire when absent; empty strings never reach it.

use crate::component::domain::Visibility;
use serde::Serialize;

/// View representation of a component as returned by the web service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WsComponent {
    /// Organization key
    pub organization: String,
    /// Component key
    pub key: String,
    /// Component name
    pub name: String,
    /// Qualifier code (TRK, VW, APP, FIL...)
    pub qualifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Date of the last analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_date: Option<String>,
    /// Start of the leak period of the last analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leak_period_date: Option<String>,
    /// Project version of the last analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Project tags; `Some(vec![])` is a project without tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Builder for [`WsComponent`]
///
/// The four identifying fields are required up front. Text setters come in
/// two flavours: plain setters store the value as given, `*_if_present`
/// setters skip `None` and empty strings so that storage quirks never leak
/// to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsComponentBuilder {
    component: WsComponent,
}

/// `None` for absent or empty values
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl WsComponentBuilder {
    pub fn new(
        organization: impl Into<String>,
        key: impl Into<String>,
        name: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        Self {
            component: WsComponent {
                organization: organization.into(),
                key: key.into(),
                name: name.into(),
                qualifier: qualifier.into(),
                branch: None,
                pull_request: None,
                path: None,
                description: None,
                language: None,
                visibility: None,
                analysis_date: None,
                leak_period_date: None,
                version: None,
                tags: None,
            },
        }
    }

    pub fn branch_if_present(mut self, branch: Option<&str>) -> Self {
        if let Some(branch) = non_empty(branch) {
            self.component.branch = Some(branch);
        }
        self
    }

    pub fn pull_request_if_present(mut self, pull_request: Option<&str>) -> Self {
        if let Some(pull_request) = non_empty(pull_request) {
            self.component.pull_request = Some(pull_request);
        }
        self
    }

    pub fn path_if_present(mut self, path: Option<&str>) -> Self {
        if let Some(path) = non_empty(path) {
            self.component.path = Some(path);
        }
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.component.description = Some(description.into());
        self
    }

    pub fn description_if_present(mut self, description: Option<&str>) -> Self {
        if let Some(description) = non_empty(description) {
            self.component.description = Some(description);
        }
        self
    }

    pub fn language_if_present(mut self, language: Option<&str>) -> Self {
        if let Some(language) = non_empty(language) {
            self.component.language = Some(language);
        }
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.component.visibility = Some(visibility);
        self
    }

    pub fn analysis_date(mut self, analysis_date: impl Into<String>) -> Self {
        self.component.analysis_date = Some(analysis_date.into());
        self
    }

    pub fn leak_period_date(mut self, leak_period_date: impl Into<String>) -> Self {
        self.component.leak_period_date = Some(leak_period_date.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.component.version = Some(version.into());
        self
    }

    /// Appends tags, keeping their order. Marks tags as present even when empty.
    pub fn add_all_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.component
            .tags
            .get_or_insert_with(Vec::new)
            .extend(tags.into_iter().map(Into::into));
        self
    }

    /// Read access to the fields set so far
    pub fn peek(&self) -> &WsComponent {
        &self.component
    }

    pub fn build(self) -> WsComponent {
        self.component
    }
}
