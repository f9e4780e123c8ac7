use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish usage mistakes from
/// failures while projecting a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the component was projected and presented
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable request, organization mismatch, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while projecting records into a web-service component.
///
/// A mismatch means the caller paired records from different organizations.
/// It is a programming error on the caller side and is never recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("OrganizationUuid ({component_organization}) of ComponentDto to convert to Ws Component is not the same as the one ({organization}) of the specified OrganizationDto")]
    OrganizationMismatch {
        /// Organization uuid carried by the component or project record
        component_organization: String,
        /// Uuid of the organization record supplied alongside it
        organization: String,
    },
}

/// Application-specific errors for the component-ws CLI.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Request file not found: {path}\n\n💡 Hint: {suggestion}")]
    RequestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse request file: {path}\nDetails: {details}\n\n💡 Hint: The request must be a JSON document with 'organization' and 'component' objects")]
    RequestParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for CLI and config values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
