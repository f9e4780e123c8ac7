//! Diagnostic logging built on the tracing ecosystem.
//!
//! User-facing progress goes through the `ProgressReporter` port; this module
//! only wires up `tracing` events for troubleshooting. Output goes to stderr
//! so it never mixes with the projected component on stdout.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set.
    pub level: Level,
    /// Whether to include target (module path).
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    /// Configuration used by `--verbose`.
    pub fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            include_target: true,
        }
    }

    fn default_directive(&self) -> String {
        format!("component_ws={}", self.level)
    }
}

/// Initializes logging. `RUST_LOG` takes precedence over the configured level.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.include_target);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
