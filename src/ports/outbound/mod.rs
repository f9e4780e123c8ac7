/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the file
/// system and the console.
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod request_reader;

pub use formatter::ComponentFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use request_reader::RequestReader;
