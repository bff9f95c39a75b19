//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! keystroke handling and field state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,field=debug` - scoped filtering
//! - `RUST_LOG=masked_input::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/masked-input/logs/masked-input.log` with
//! daily rotation. File logging uses debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::keys::Key;
use crate::model::FormattedField;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging writes to the logs directory with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG; stdout is reserved for emissions
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of field state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot {
    pub formatted: String,
    pub cursor: usize,
    pub valid: bool,
    pub error_shown: bool,
    pub last_key: Option<Key>,
}

impl FieldSnapshot {
    pub fn from_field(field: &FormattedField) -> Self {
        Self {
            formatted: field.formatted().to_string(),
            cursor: field.cursor(),
            valid: field.state().valid,
            error_shown: field.state().shows_error(),
            last_key: field.last_key(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &FieldSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.formatted != other.formatted || self.cursor != other.cursor {
            changes.push(format!(
                "{:?}@{} → {:?}@{}",
                self.formatted, self.cursor, other.formatted, other.cursor
            ));
        }
        if self.valid != other.valid {
            changes.push(format!("valid: {} → {}", self.valid, other.valid));
        }
        if self.error_shown != other.error_shown {
            let status = if other.error_shown { "shown" } else { "hidden" };
            changes.push(format!("error {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
