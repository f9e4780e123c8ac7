//! Configuration file support for component-ws.
//!
//! Provides YAML-based configuration through `component-ws.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::application::dto::OutputFormat;
use crate::shared::error::AppError;
use crate::shared::security::validate_document;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "component-ws.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any. Validated at load time.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    /// Warn about unknown fields in the config file.
    ///
    /// Called once logging is initialized, which itself depends on the config.
    pub fn warn_unknown_fields(&self) {
        for key in self.unknown_fields.keys() {
            warn!("Unknown config field '{}' will be ignored", key);
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_document(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null, treat it as "no settings".
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(reason) = format.parse::<OutputFormat>() {
            return Err(invalid_config(format!(
                "{}\n\n💡 Hint: 'format' must be 'json' or 'markdown'.",
                reason
            )));
        }
    }
    if let Some(ref output) = config.output {
        if output.as_os_str().is_empty() {
            return Err(invalid_config(
                "'output' must not be empty.\n\n💡 Hint: Remove the key to write to stdout."
                    .to_string(),
            ));
        }
    }
    Ok(())
}

fn invalid_config(message: String) -> anyhow::Error {
    AppError::Validation {
        message: format!("Invalid config: {}", message),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yml",
            r#"
format: markdown
output: component.md
verbose: true
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.output_format(), Some(OutputFormat::Markdown));
        assert_eq!(config.output, Some(PathBuf::from("component.md")));
        assert_eq!(config.verbose, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, CONFIG_FILENAME, "format: json\n");

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let error = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "bad.yml", "invalid: yaml: [[[broken");

        let error = load_config_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "empty.yml", "");

        let config = load_config_from_path(&path).unwrap();
        assert!(config.format.is_none());
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yml", "format: xml\n");

        let error = load_config_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("Invalid format: xml"));
        assert!(matches!(
            error.downcast_ref::<AppError>(),
            Some(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_empty_output_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "config.yml", "output: \"\"\n");

        let error = load_config_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("'output' must not be empty"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "config.yml",
            r#"
format: json
check_cve: true
pretty: false
"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert!(config.unknown_fields.contains_key("pretty"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.output.is_none());
        assert!(config.verbose.is_none());
        assert!(config.output_format().is_none());
    }
}
