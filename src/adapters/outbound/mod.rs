/// Outbound adapters - console, filesystem and output formats
pub mod console;
pub mod filesystem;
pub mod formatters;
