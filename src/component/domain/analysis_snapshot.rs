use chrono::{DateTime, Utc};
use serde::Deserialize;

/// AnalysisSnapshot - the last analysis recorded for a component
///
/// Timestamps are persisted as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    /// Start of the leak period, the baseline for "new code"
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    period_date: Option<DateTime<Utc>>,
    #[serde(default)]
    project_version: Option<String>,
}

impl AnalysisSnapshot {
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            period_date: None,
            project_version: None,
        }
    }

    pub fn with_period_date(mut self, period_date: DateTime<Utc>) -> Self {
        self.period_date = Some(period_date);
        self
    }

    pub fn with_project_version(mut self, project_version: impl Into<String>) -> Self {
        self.project_version = Some(project_version.into());
        self
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn period_date(&self) -> Option<&DateTime<Utc>> {
        self.period_date.as_ref()
    }

    pub fn project_version(&self) -> Option<&str> {
        self.project_version.as_deref()
    }
}
