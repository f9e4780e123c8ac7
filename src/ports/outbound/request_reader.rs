use crate::shared::Result;
use std::path::Path;

/// RequestReader port for loading request documents
///
/// Abstracts where the records of a projection come from.
pub trait RequestReader {
    /// Reads the raw request document at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The document does not exist
    /// - The path fails the security checks (symlink, not a file, too large)
    /// - The file cannot be read due to permissions or I/O errors
    fn read_request(&self, path: &Path) -> Result<String>;
}
