//! Logging setup
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=format_toolbar=debug` - show/hide and format transitions
//! - `RUST_LOG=format_toolbar::coordinator=trace` - also timer and delivery activity
//!
//! Without RUST_LOG the console only shows toolbar warnings (formats requested
//! with no active input) and errors from anything else. Transitions are always
//! written to `~/.config/format-toolbar/logs/toolbar.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console filter used when RUST_LOG is unset or invalid
pub const DEFAULT_CONSOLE_FILTER: &str = "error,format_toolbar=warn";

/// File filter: every toolbar transition, other crates at warn
pub const FILE_FILTER: &str = "warn,format_toolbar=debug";

const LOG_FILE_PREFIX: &str = "toolbar.log";

/// Console filter from RUST_LOG, falling back to [`DEFAULT_CONSOLE_FILTER`]
pub fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER))
}

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter());

    let logs_dir = crate::config_paths::ensure_logs_dir();
    let file_layer = match &logs_dir {
        Ok(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(FILE_FILTER)),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize toolbar log file: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    if let Ok(dir) = logs_dir {
        tracing::debug!(log_dir = %dir.display(), "Toolbar logging initialized");
    }
}
