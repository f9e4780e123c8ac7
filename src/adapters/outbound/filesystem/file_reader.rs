use crate::ports::outbound::RequestReader;
use crate::shared::error::AppError;
use crate::shared::security::validate_document;
use crate::shared::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// FileSystemReader adapter for reading request documents from disk
///
/// Every read goes through the document security checks first: no
/// symbolic links, regular files only, bounded size.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestReader for FileSystemReader {
    fn read_request(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(AppError::RequestNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the path of an existing JSON request document with --input"
                    .to_string(),
            }
            .into());
        }

        validate_document(path, "request document")?;

        let content = fs::read_to_string(path).map_err(|e| AppError::RequestParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded request document");
        Ok(content)
    }
}
