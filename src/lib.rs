//! Masked text input - Elm-style formatting core
//!
//! This crate turns keystroke-driven edits of a single text field into a
//! canonical digit sequence, a formatted display string (currency or phone
//! number), a validity flag, and a caret position to restore, following the
//! Elm Architecture pattern: host events become [`FieldMsg`]s, [`update`]
//! mutates the owned [`FormattedField`], and the returned [`Cmd`] tells the
//! host what to do.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod cursor;
pub mod format;
pub mod host;
pub mod keys;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::InputConfig;
pub use format::{FormatKind, InputFormat};
pub use host::{FormattedInput, MemoryHost, Notifier, TextHost};
pub use keys::Key;
pub use messages::FieldMsg;
pub use model::{FieldState, FormattedField};
pub use update::update;
