/// Crate-wide result type.
///
/// Typed errors (`AppError`, `ProjectionError`) are wrapped in
/// `anyhow::Error` and recovered with `downcast_ref` where callers care.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
