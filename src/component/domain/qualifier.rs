//! Qualifier codes classifying what kind of component a record describes.
//!
//! Qualifiers are stored as short strings on every component row, so they
//! are kept as `&str` constants rather than an enum: unknown codes coming
//! from storage must pass through the projection untouched.

/// Root project
pub const PROJECT: &str = "TRK";
/// Portfolio
pub const VIEW: &str = "VW";
/// Sub-portfolio
pub const SUBVIEW: &str = "SVW";
/// Application
pub const APP: &str = "APP";
/// Legacy multi-module project module
pub const MODULE: &str = "BRC";
pub const DIRECTORY: &str = "DIR";
pub const FILE: &str = "FIL";
pub const UNIT_TEST_FILE: &str = "UTS";

/// Human readable name of a qualifier, used by the Markdown output.
///
/// Unknown codes are returned as-is.
pub fn display_name(qualifier: &str) -> &str {
    match qualifier {
        PROJECT => "Project",
        VIEW => "Portfolio",
        SUBVIEW => "Sub-portfolio",
        APP => "Application",
        MODULE => "Module",
        DIRECTORY => "Directory",
        FILE => "File",
        UNIT_TEST_FILE => "Test File",
        other => other,
    }
}
