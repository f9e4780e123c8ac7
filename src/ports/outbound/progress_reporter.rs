/// ProgressReporter port for user-facing status messages
///
/// Messages go to a side channel (stderr for the CLI) so they never mix
/// with the projected component.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
